//! User account records.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// An authenticated user, as returned by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account role (`user` or `admin`).
    #[serde(default)]
    pub role: String,
}

impl User {
    /// Returns true when the account may call admin endpoints.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_check_is_case_insensitive() {
        let json = r#"{"_id":"u-1","name":"Asha","email":"asha@example.com","role":"Admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
    }
}

//! Auth endpoints: register, login, current user.
//!
//! Session storage is the embedder's concern; the client only holds the
//! bearer credential in memory for the life of the process. `login` and
//! `register` capture the token the backend returns so subsequent calls
//! are authenticated.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use sprout_core::error::Result;
use sprout_core::user::User;

use crate::StorefrontClient;

/// Payload for `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct Registration {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Display name.
    pub name: String,
}

/// Payload for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Response of the register and login endpoints.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests.
    #[serde(default)]
    pub token: Option<String>,
    /// The authenticated user, when the backend includes it.
    #[serde(default)]
    pub user: Option<User>,
}

impl StorefrontClient {
    /// Registers a new account and captures the returned token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the email is taken.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .send_json(
                Method::POST,
                "/auth/register",
                Some(registration),
                "registration failed",
            )
            .await?;
        if let Some(token) = &response.token {
            self.set_token(token.clone());
        }
        Ok(response)
    }

    /// Logs in and captures the returned token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are
    /// rejected.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .send_json(
                Method::POST,
                "/auth/login",
                Some(credentials),
                "login failed",
            )
            .await?;
        if let Some(token) = &response.token {
            self.set_token(token.clone());
        }
        Ok(response)
    }

    /// Drops the held credential. Purely local; the backend keeps no
    /// session state.
    pub fn logout(&self) {
        self.clear_token();
    }

    /// Fetches the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no valid credential is
    /// held.
    pub async fn current_user(&self) -> Result<User> {
        self.get_json("/auth/me", &[], "failed to fetch user").await
    }
}

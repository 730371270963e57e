//! Category records.

use serde::{Deserialize, Serialize};

use crate::id::CategoryId;

/// A product category, as returned by `GET /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: CategoryId,
    /// Category name, also used as the product filter value.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional banner image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

//! Category endpoints.

use reqwest::Method;
use serde::Serialize;

use sprout_core::category::Category;
use sprout_core::error::Result;
use sprout_core::id::CategoryId;

use crate::{Ack, StorefrontClient};

/// Payload for creating a category (admin).
#[derive(Debug, Serialize)]
pub struct NewCategory {
    /// Category name, used as the product filter value.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional banner image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl StorefrontClient {
    /// Fetches every category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.get_json("/categories", &[], "failed to fetch categories")
            .await
    }

    /// Fetches one category by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the category is unknown.
    pub async fn category(&self, id: &CategoryId) -> Result<Category> {
        self.get_json(&format!("/categories/{id}"), &[], "failed to fetch category")
            .await
    }

    /// Creates a category (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category> {
        self.send_json(
            Method::POST,
            "/categories",
            Some(category),
            "failed to create category",
        )
        .await
    }

    /// Updates a category (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_category(&self, id: &CategoryId, category: &NewCategory) -> Result<Category> {
        self.send_json(
            Method::PUT,
            &format!("/categories/{id}"),
            Some(category),
            "failed to update category",
        )
        .await
    }

    /// Deletes a category (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_category(&self, id: &CategoryId) -> Result<Ack> {
        self.send_json::<Ack, ()>(
            Method::DELETE,
            &format!("/categories/{id}"),
            None,
            "failed to delete category",
        )
        .await
    }
}

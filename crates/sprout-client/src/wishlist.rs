//! Wishlist endpoints.

use reqwest::Method;
use serde::Serialize;

use sprout_core::error::Result;
use sprout_core::id::ProductId;
use sprout_core::product::ProductSummary;

use crate::{Ack, StorefrontClient};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WishlistEntry<'a> {
    product_id: &'a ProductId,
}

impl StorefrontClient {
    /// Fetches the shopper's wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn wishlist(&self) -> Result<Vec<ProductSummary>> {
        self.get_json("/wishlist", &[], "failed to fetch wishlist")
            .await
    }

    /// Adds a product to the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn add_to_wishlist(&self, product_id: &ProductId) -> Result<Ack> {
        self.send_json(
            Method::POST,
            "/wishlist",
            Some(&WishlistEntry { product_id }),
            "failed to add to wishlist",
        )
        .await
    }

    /// Removes a product from the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove_from_wishlist(&self, product_id: &ProductId) -> Result<Ack> {
        self.send_json::<Ack, ()>(
            Method::DELETE,
            &format!("/wishlist/{product_id}"),
            None,
            "failed to remove from wishlist",
        )
        .await
    }

    /// Empties the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn clear_wishlist(&self) -> Result<Ack> {
        self.send_json::<Ack, ()>(Method::DELETE, "/wishlist", None, "failed to clear wishlist")
            .await
    }
}

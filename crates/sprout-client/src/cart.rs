//! Cart endpoints.
//!
//! Canonical paths: `/cart` for the collection, `/cart/{productId}` for
//! one line. No trailing slashes; see DESIGN.md.

use reqwest::Method;
use serde::Serialize;

use sprout_core::cart::Cart;
use sprout_core::error::Result;
use sprout_core::id::ProductId;

use crate::{Ack, StorefrontClient};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CartLine<'a> {
    product_id: &'a ProductId,
    quantity: u32,
}

impl StorefrontClient {
    /// Fetches the shopper's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn cart(&self) -> Result<Cart> {
        self.get_json("/cart", &[], "failed to fetch cart").await
    }

    /// Adds `quantity` units of a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product is out of
    /// stock.
    pub async fn add_to_cart(&self, product_id: &ProductId, quantity: u32) -> Result<Cart> {
        self.send_json(
            Method::POST,
            "/cart",
            Some(&CartLine {
                product_id,
                quantity,
            }),
            "failed to add to cart",
        )
        .await
    }

    /// Sets the quantity of an existing cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_cart_item(&self, product_id: &ProductId, quantity: u32) -> Result<Cart> {
        self.send_json(
            Method::PUT,
            "/cart",
            Some(&CartLine {
                product_id,
                quantity,
            }),
            "failed to update cart item",
        )
        .await
    }

    /// Removes one product from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove_from_cart(&self, product_id: &ProductId) -> Result<Cart> {
        self.send_json::<Cart, ()>(
            Method::DELETE,
            &format!("/cart/{product_id}"),
            None,
            "failed to remove from cart",
        )
        .await
    }

    /// Empties the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn clear_cart(&self) -> Result<Ack> {
        self.send_json::<Ack, ()>(Method::DELETE, "/cart", None, "failed to clear cart")
            .await
    }
}

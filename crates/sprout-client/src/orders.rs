//! Order endpoints: checkout, history, and admin reports.
//!
//! Canonical collection path: plural `/orders`, matching `/products` and
//! `/categories`; see DESIGN.md.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use sprout_core::error::Result;
use sprout_core::id::{OrderId, ProductId, UserId};
use sprout_core::order::{Order, OrderStatus, ShippingAddress};

use crate::StorefrontClient;

/// One line of a checkout request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    /// The product to order.
    pub product_id: ProductId,
    /// Quantity to order.
    pub quantity: u32,
}

/// Payload for `POST /orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    /// The lines to order.
    pub items: Vec<CheckoutItem>,
    /// Destination address.
    pub shipping_address: ShippingAddress,
    /// Payment method label (e.g. `razorpay`, `cod`).
    pub payment_method: String,
}

#[derive(Debug, Serialize)]
struct StatusUpdate<'a> {
    status: &'a str,
}

/// One row of the per-product sales report (admin).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    /// The product the row describes.
    pub product_id: ProductId,
    /// Product name.
    #[serde(default)]
    pub name: String,
    /// Units sold.
    pub units: u64,
    /// Revenue in rupees.
    pub revenue: f64,
}

/// One row of the monthly sales report (admin).
#[derive(Debug, Deserialize)]
pub struct MonthlySales {
    /// Month label, `YYYY-MM`.
    pub month: String,
    /// Revenue in rupees.
    pub total: f64,
}

#[derive(Debug, Deserialize)]
struct TotalSales {
    total: f64,
}

impl StorefrontClient {
    /// Places an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or stock ran out.
    pub async fn create_order(&self, checkout: &Checkout) -> Result<Order> {
        self.send_json(
            Method::POST,
            "/orders",
            Some(checkout),
            "failed to create order",
        )
        .await
    }

    /// Fetches the authenticated shopper's order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn orders(&self) -> Result<Vec<Order>> {
        self.get_json("/orders", &[], "failed to fetch orders").await
    }

    /// Fetches one order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order is unknown.
    pub async fn order(&self, id: &OrderId) -> Result<Order> {
        self.get_json(&format!("/orders/{id}"), &[], "failed to fetch order")
            .await
    }

    /// Fetches a user's orders (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn orders_for_user(&self, user_id: &UserId) -> Result<Vec<Order>> {
        self.get_json(
            &format!("/orders/user/{user_id}"),
            &[],
            "failed to fetch user orders",
        )
        .await
    }

    /// Fetches orders in a given lifecycle state (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>> {
        self.get_json(
            &format!("/orders/status/{}", status.as_str()),
            &[],
            "failed to fetch orders by status",
        )
        .await
    }

    /// Moves an order to a new lifecycle state (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the transition is not
    /// allowed.
    pub async fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order> {
        self.send_json(
            Method::PUT,
            &format!("/orders/{id}/status"),
            Some(&StatusUpdate {
                status: status.as_str(),
            }),
            "failed to update order status",
        )
        .await
    }

    /// Cancels an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order already
    /// shipped.
    pub async fn cancel_order(&self, id: &OrderId) -> Result<Order> {
        self.send_json::<Order, ()>(
            Method::PATCH,
            &format!("/orders/{id}/cancel"),
            None,
            "failed to cancel order",
        )
        .await
    }

    /// Fetches the per-product sales report (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn sales_by_product(&self) -> Result<Vec<ProductSales>> {
        self.get_json("/orders/sales", &[], "failed to fetch sales by products")
            .await
    }

    /// Fetches total sales across all orders (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn total_sales(&self) -> Result<f64> {
        let total: TotalSales = self
            .get_json("/orders/total-sales", &[], "failed to fetch total sales")
            .await?;
        Ok(total.total)
    }

    /// Fetches the month-by-month sales report (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn monthly_sales(&self) -> Result<Vec<MonthlySales>> {
        self.get_json(
            "/orders/monthly-sales",
            &[],
            "failed to fetch monthly sales report",
        )
        .await
    }
}

//! Order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{OrderId, ProductId};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Created but not yet paid.
    Pending,
    /// Payment verified.
    Paid,
    /// Handed to the courier.
    Shipped,
    /// Delivered to the shopper.
    Delivered,
    /// Cancelled by the shopper or an admin.
    Cancelled,
}

impl OrderStatus {
    /// Wire name of the status, as used in `/orders/status/{status}`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A shipping destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Recipient name.
    pub name: String,
    /// Street address.
    pub line1: String,
    /// Apartment, landmark, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// Contact phone number.
    pub phone: String,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The ordered product.
    pub product_id: ProductId,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price at time of order, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// An order, as returned by the orders endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: OrderId,
    /// Order lines.
    pub items: Vec<OrderItem>,
    /// Destination address.
    pub shipping_address: ShippingAddress,
    /// Payment method label (e.g. `razorpay`, `cod`).
    pub payment_method: String,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Order total in rupees.
    #[serde(default)]
    pub total: f64,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

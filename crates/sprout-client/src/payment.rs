//! Payment gateway endpoints.
//!
//! The backend fronts Razorpay; the client only creates a gateway order
//! and submits the signed confirmation back for verification. Amounts
//! cross the wire in integer paise.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use sprout_core::error::Result;
use sprout_core::order::Order;

use crate::StorefrontClient;
use crate::orders::Checkout;

#[derive(Debug, Serialize)]
struct CreatePayment {
    amount: i64,
}

/// A gateway order, as returned by `POST /payment/create`.
#[derive(Debug, Deserialize)]
pub struct PaymentOrder {
    /// Gateway order id, handed to the checkout widget.
    pub id: String,
    /// Amount in paise.
    pub amount: i64,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
}

/// The signed confirmation the gateway hands back after a successful
/// payment, submitted for server-side verification.
#[derive(Debug, Serialize)]
pub struct PaymentConfirmation {
    /// Gateway order id.
    pub razorpay_order_id: String,
    /// Gateway payment id.
    pub razorpay_payment_id: String,
    /// HMAC signature over order and payment ids.
    pub razorpay_signature: String,
    /// The checkout to place once the payment verifies.
    #[serde(rename = "orderData")]
    pub order: Checkout,
}

impl StorefrontClient {
    /// Creates a gateway order for the given rupee amount.
    ///
    /// The amount is converted to integer paise with rounding, matching
    /// what the gateway expects.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_payment_order(&self, amount_rupees: f64) -> Result<PaymentOrder> {
        #[allow(clippy::cast_possible_truncation)]
        let amount = (amount_rupees * 100.0).round() as i64;
        self.send_json(
            Method::POST,
            "/payment/create",
            Some(&CreatePayment { amount }),
            "failed to create payment order",
        )
        .await
    }

    /// Verifies a gateway payment and places the order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the signature does not
    /// verify.
    pub async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> Result<Order> {
        self.send_json(
            Method::POST,
            "/payment/verify",
            Some(confirmation),
            "payment verification failed",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn rupees_round_to_paise() {
        // 1234.565 rupees -> 123457 paise, with round-half-up behavior
        // close enough for display amounts.
        let paise = (1234.565_f64 * 100.0).round() as i64;
        assert_eq!(paise, 123_457);

        let paise = (499.0_f64 * 100.0).round() as i64;
        assert_eq!(paise, 49_900);
    }
}

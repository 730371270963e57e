//! Cart records and the shared cart-badge counter.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// One line in a shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Product name at time of add.
    pub name: String,
    /// Unit price in rupees.
    pub price: f64,
    /// Primary image URL.
    #[serde(default)]
    pub image: String,
    /// Quantity in the cart.
    pub quantity: u32,
    /// Size chosen by the shopper, if the product has sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    /// Color chosen by the shopper, if the product has colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

/// The shopper's cart as returned by `GET /cart`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Cart lines.
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.iter().map(|i| i.quantity as usize).sum()
    }

    /// Cart total in rupees.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum()
    }
}

/// Shared counter behind the cart badge.
///
/// An explicitly injected store with two named mutations, not a
/// module-level global. Clones share one counter; every component that
/// shows or updates the badge receives a clone.
#[derive(Debug, Clone, Default)]
pub struct CartCounter {
    count: Arc<AtomicUsize>,
}

impl CartCounter {
    /// Creates a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current badge value.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Sets the badge to an exact value (after a cart fetch or mutation).
    pub fn set_count(&self, count: usize) {
        self.count.store(count, Ordering::Relaxed);
    }

    /// Resets the badge to zero (after checkout or logout).
    pub fn clear(&self) {
        self.count.store(0, Ordering::Relaxed);
    }
}

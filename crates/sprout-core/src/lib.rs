//! # sprout-core
//!
//! Shared primitives for the Sprout storefront client toolkit.
//!
//! This crate provides the foundational types used across all Sprout
//! components:
//!
//! - **Identifiers**: Strongly-typed IDs for products, orders, users, and categories
//! - **Domain Records**: Read-only projections of backend documents
//! - **Pagination Envelope**: The `{ data, total, totalPages }` wire shape
//! - **Error Types**: Shared error definitions and result types
//! - **Cart Counter**: The injectable cart-badge store
//!
//! ## Crate Boundary
//!
//! `sprout-core` is the only crate allowed to define shared primitives.
//! The catalog controller, the HTTP bindings, and the CLI all speak in
//! terms of these types.
//!
//! ## Example
//!
//! ```rust
//! use sprout_core::prelude::*;
//!
//! let id = ProductId::from("66b1f2a9c4d8e90012ab34cd");
//! let counter = CartCounter::new();
//! counter.set_count(3);
//! assert_eq!(counter.count(), 3);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod banner;
pub mod cart;
pub mod category;
pub mod error;
pub mod id;
pub mod observability;
pub mod order;
pub mod page;
pub mod product;
pub mod user;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use sprout_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::banner::{Banner, BannerKind, BannerPosition};
    pub use crate::cart::{Cart, CartCounter, CartItem};
    pub use crate::category::Category;
    pub use crate::error::{Error, Result};
    pub use crate::id::{BannerId, CategoryId, OrderId, ProductId, UserId};
    pub use crate::order::{Order, OrderItem, OrderStatus, ShippingAddress};
    pub use crate::page::Page;
    pub use crate::product::{NewProduct, Product, ProductPatch, ProductSummary};
    pub use crate::user::User;
}

pub use error::{Error, Result};

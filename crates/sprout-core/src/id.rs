//! Strongly-typed identifiers for Sprout entities.
//!
//! The backend assigns opaque document ids (hex object ids); the client
//! never generates them. Wrapping them in newtypes prevents mixing up
//! ID kinds at compile time.
//!
//! # Example
//!
//! ```rust
//! use sprout_core::id::{OrderId, ProductId};
//!
//! let product = ProductId::from("66b1f2a9c4d8e90012ab34cd");
//! let order = OrderId::from("66b1f30dc4d8e90012ab34ce");
//!
//! // IDs are different types - this won't compile:
//! // let wrong: ProductId = order;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw backend identifier.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

string_id! {
    /// A unique identifier for a product in the catalog.
    ProductId
}

string_id! {
    /// A unique identifier for a product category.
    CategoryId
}

string_id! {
    /// A unique identifier for an order.
    OrderId
}

string_id! {
    /// A unique identifier for a promotional banner.
    BannerId
}

string_id! {
    /// A unique identifier for a user account.
    UserId
}

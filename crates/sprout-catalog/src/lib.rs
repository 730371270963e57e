//! # sprout-catalog
//!
//! The product discovery controller for the Sprout storefront.
//!
//! One component owns filter state, pagination state, and fetch
//! orchestration for the product list, and coordinates three triggers
//! (filter change, explicit page navigation, scroll-based load-more)
//! against one data source without overlapping or duplicate requests:
//!
//! - [`Filters`]: the shopper's filter selections and their wire encoding
//! - [`BrowseState`]: pure, generation-checked state transitions
//! - [`CatalogBrowser`]: the async orchestrator over a [`CatalogSource`]
//! - [`sentinel`]: the scroll-proximity adapter that drives load-more
//!
//! ## Staleness
//!
//! Every filter change (and explicit page navigation) starts a new
//! *generation*. A response is merged only when its generation still
//! matches the controller's; anything older is dropped on arrival. That
//! is the only cancellation mechanism - fetches are idempotent reads, so
//! letting a superseded request finish and ignoring it is sufficient.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sprout_catalog::{CatalogBrowser, Filters};
//!
//! let browser = CatalogBrowser::new(source, 12);
//! browser.set_filters(Filters::default()).await;
//! while browser.snapshot().page.has_more {
//!     browser.load_more().await;
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod browser;
pub mod filters;
pub mod sentinel;
pub mod state;

pub use browser::{BrowseSnapshot, CatalogBrowser, CatalogSource};
pub use filters::{Filters, PriceRange, Sort, DEFAULT_PRICE_CEILING};
pub use sentinel::{drive_sentinel, SentinelEvent};
pub use state::{BrowseState, Merge, PageState, Phase};

//! Shared test utilities for Sprout integration tests.
//!
//! This crate provides:
//! - Factory functions for fixture products
//! - [`StubStorefront`]: an in-process `axum` stand-in for the backend,
//!   bound to an ephemeral loopback port so `reqwest`-based code can be
//!   exercised over a real socket
//! - [`init_test_logging`]: tracing setup for tests
//!
//! # Example
//!
//! ```rust,ignore
//! use sprout_test_utils::StubStorefront;
//!
//! #[tokio::test]
//! async fn test_example() {
//!     let stub = StubStorefront::with_catalog(30).spawn().await;
//!     let client = StorefrontClient::builder(stub.api_url()).build().unwrap();
//!     // ... exercise the client ...
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
// Test utilities use expect/unwrap for cleaner test code - panics are acceptable in tests
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]

pub mod fixtures;
pub mod stub;

pub use fixtures::*;
pub use stub::*;

/// Initialize test logging (call once per test module).
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("sprout=debug".parse().expect("valid directive")),
        )
        .with_test_writer()
        .try_init();
}

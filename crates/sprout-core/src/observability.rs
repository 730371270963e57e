//! Observability infrastructure for Sprout.
//!
//! Structured logging with consistent spans. This module provides
//! initialization helpers and span constructors used across the catalog
//! controller and the HTTP bindings.

use std::sync::Once;

use tracing::Span;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Log output format.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// JSON structured logs (for production).
    Json,
    /// Pretty-printed logs (for development).
    #[default]
    Pretty,
}

/// Initializes the logging subsystem.
///
/// Call once at startup; later calls are no-ops. With no `RUST_LOG` set,
/// the sprout crates log at `info` and everything else stays quiet.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Overrides log levels (e.g., `sprout_catalog=debug`)
///
/// # Example
///
/// ```rust
/// use sprout_core::observability::{init_logging, LogFormat};
///
/// init_logging(LogFormat::Pretty);
/// ```
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());
        let registry = tracing_subscriber::registry().with(filter);
        match format {
            LogFormat::Json => registry
                .with(fmt::layer().json().flatten_event(true))
                .init(),
            LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).init(),
        }
    });
}

fn default_filter() -> EnvFilter {
    ["sprout_core", "sprout_catalog", "sprout_client", "sprout_cli"]
        .iter()
        .fold(EnvFilter::new("warn"), |filter, krate| {
            match format!("{krate}=info").parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
}

/// Creates a span for catalog browse operations with standard fields.
///
/// # Example
///
/// ```rust
/// use sprout_core::observability::browse_span;
///
/// let span = browse_span("load_more", 3, 2);
/// let _guard = span.enter();
/// // ... fetch and merge the next page
/// ```
#[must_use]
pub fn browse_span(operation: &str, generation: u64, page: u32) -> Span {
    tracing::info_span!(
        "browse",
        op = operation,
        generation = generation,
        page = page,
    )
}

/// Creates a span for storefront API calls.
#[must_use]
pub fn api_span(method: &str, path: &str) -> Span {
    tracing::info_span!("storefront_api", method = method, path = path)
}

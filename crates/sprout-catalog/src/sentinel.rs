//! Scroll-proximity trigger for load-more.
//!
//! The embedder owns the actual visibility sensor (an intersection
//! observer in a browser shell, a row-position check in a TUI) and feeds
//! [`SentinelEvent`]s through a channel. The adapter here stays thin:
//! every load-more decision is made by the pure precondition in
//! [`BrowseState`](crate::state::BrowseState), so the dedup and ordering
//! logic is testable without simulating real scrolling.

use tokio::sync::mpsc;

use crate::browser::{CatalogBrowser, CatalogSource};
use crate::state::Phase;

/// Visibility change of the sentinel element placed after the last
/// rendered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelEvent {
    /// The sentinel entered (or came near) the viewport.
    Visible,
    /// The sentinel left the viewport.
    Hidden,
}

/// Consumes sentinel events and drives the browser's load-more path.
///
/// Runs until the catalog is exhausted or the event channel closes
/// (unmount). Triggers that arrive while a fetch is in flight, or before
/// any data has loaded, are ignored; the in-flight guard inside
/// [`CatalogBrowser::load_more`] makes duplicate triggers harmless.
///
/// A filter change starts a new generation, so embedders re-attach a
/// fresh sentinel loop for the new result set, exactly as a view layer
/// re-subscribes its observer when the list is rebuilt.
pub async fn drive_sentinel<S: CatalogSource>(
    browser: &CatalogBrowser<S>,
    mut events: mpsc::Receiver<SentinelEvent>,
) {
    while let Some(event) = events.recv().await {
        if event != SentinelEvent::Visible {
            continue;
        }

        browser.load_more().await;

        if browser.snapshot().phase == Phase::Exhausted {
            tracing::debug!("sentinel detached: catalog exhausted");
            return;
        }
    }
    tracing::debug!("sentinel detached: channel closed");
}

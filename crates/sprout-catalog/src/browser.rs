//! The catalog browser: async fetch orchestration over a data source.
//!
//! [`CatalogBrowser`] is the single writer of browse state. The rendering
//! layer reads cloned snapshots and dispatches operations; it never
//! mutates state directly. The internal lock is never held across an
//! await: each operation captures its generation token, fetches, then
//! re-locks to merge (or drop) the response.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use sprout_core::error::Result;
use sprout_core::observability::browse_span;
use sprout_core::page::Page;
use sprout_core::product::ProductSummary;

use crate::filters::Filters;
use crate::state::{BrowseState, Merge};

/// A source of catalog pages.
///
/// The one seam between the controller and the network. Fetches are
/// idempotent reads; implementations must not retry internally (retry is
/// a user action per the error model).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches one page of products matching `filters`.
    async fn fetch_page(
        &self,
        filters: &Filters,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ProductSummary>>;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<S> {
    async fn fetch_page(
        &self,
        filters: &Filters,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ProductSummary>> {
        (**self).fetch_page(filters, page, page_size).await
    }
}

/// A read-only copy of the browse state for the rendering layer.
pub type BrowseSnapshot = BrowseState;

/// The catalog view controller.
///
/// Owns filter state, pagination state, and the result set; coordinates
/// filter changes, explicit page navigation, and scroll-driven load-more
/// against one [`CatalogSource`] without overlapping requests.
pub struct CatalogBrowser<S> {
    source: S,
    state: Mutex<BrowseState>,
}

impl<S: CatalogSource> CatalogBrowser<S> {
    /// Creates a browser over `source` with the given page size.
    #[must_use]
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            state: Mutex::new(BrowseState::new(page_size)),
        }
    }

    fn state(&self) -> MutexGuard<'_, BrowseState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a cloned snapshot of the current browse state.
    #[must_use]
    pub fn snapshot(&self) -> BrowseSnapshot {
        self.state().clone()
    }

    /// Returns true when a scroll trigger should start a load-more fetch.
    #[must_use]
    pub fn should_load_more(&self) -> bool {
        self.state().should_load_more()
    }

    /// Replaces the filter selection wholesale and fetches page 1.
    ///
    /// Supersedes any fetch in flight: its response, when it eventually
    /// arrives, no longer matches the current generation and is dropped.
    pub async fn set_filters(&self, next: Filters) {
        let (generation, filters, page_size) = {
            let mut state = self.state();
            let generation = state.begin_filter_change(next);
            (generation, state.filters.clone(), state.page.page_size)
        };
        self.fetch_and_merge(generation, 1, Merge::Replace, &filters, page_size)
            .await;
    }

    /// Resets every filter to its default, refetching page 1.
    ///
    /// The affordance behind the "no products found" empty state.
    pub async fn reset_filters(&self) {
        self.set_filters(Filters::default()).await;
    }

    /// Fetches page `n` under the current filters and replaces the result
    /// set with that page (non-cumulative navigation).
    ///
    /// `n` below 1 is clamped; callers should disable navigation controls
    /// at the boundaries.
    pub async fn load_page(&self, n: u32) {
        let (generation, target, filters, page_size) = {
            let mut state = self.state();
            let (generation, target) = state.begin_navigate(n);
            (generation, target, state.filters.clone(), state.page.page_size)
        };
        self.fetch_and_merge(generation, target, Merge::Replace, &filters, page_size)
            .await;
    }

    /// Fetches the next page and appends it to the result set.
    ///
    /// A no-op (returning `false`) unless `has_more` holds and no fetch
    /// is in flight, which serializes load-more fetches and makes
    /// repeated scroll triggers harmless.
    pub async fn load_more(&self) -> bool {
        let (generation, target, filters, page_size) = {
            let mut state = self.state();
            let Some((generation, target)) = state.begin_load_more() else {
                return false;
            };
            (generation, target, state.filters.clone(), state.page.page_size)
        };
        self.fetch_and_merge(generation, target, Merge::Append, &filters, page_size)
            .await;
        true
    }

    /// Narrows the already-fetched result set by a case-insensitive
    /// substring match on name, description, and category.
    ///
    /// Purely client-side: no fetch is triggered and pagination state is
    /// untouched. The underlying result set is not modified.
    #[must_use]
    pub fn search_narrow(&self, query: &str) -> Vec<ProductSummary> {
        let state = self.state();
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return state.items.clone();
        }
        state
            .items
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    async fn fetch_and_merge(
        &self,
        generation: u64,
        page_no: u32,
        merge: Merge,
        filters: &Filters,
        page_size: u32,
    ) {
        let result = self.source.fetch_page(filters, page_no, page_size).await;

        let span = browse_span(
            match merge {
                Merge::Replace => "replace",
                Merge::Append => "append",
            },
            generation,
            page_no,
        );
        let _guard = span.enter();

        let mut state = self.state();
        match result {
            Ok(fetched) => {
                let count = fetched.len();
                if state.apply_page(generation, page_no, merge, fetched) {
                    tracing::debug!(count, has_more = state.page.has_more, "page merged");
                } else {
                    tracing::debug!(count, "stale response dropped");
                }
            }
            Err(err) => {
                if state.apply_failure(generation, err.to_string()) {
                    tracing::debug!(error = %err, "fetch failed");
                } else {
                    tracing::debug!(error = %err, "stale failure dropped");
                }
            }
        }
    }
}

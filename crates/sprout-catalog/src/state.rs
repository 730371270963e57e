//! Pure browse-state transitions.
//!
//! The state machine lives here as plain `(state, event) -> state'`
//! functions so fetch ordering and dedup logic are testable without a
//! network or a scroll surface. [`crate::browser::CatalogBrowser`] is the
//! thin async adapter that drives these transitions.
//!
//! Per-generation lifecycle:
//!
//! ```text
//! Idle -> FetchingInitial -> Idle -> FetchingMore -> Idle -> ... -> Exhausted
//! ```
//!
//! Any filter change or explicit navigation starts a new generation from
//! `FetchingInitial`; `Exhausted` is terminal for the load-more path and
//! is left only by starting a new generation.

use sprout_core::page::Page;
use sprout_core::product::ProductSummary;

use crate::filters::Filters;

/// Where the controller is in the fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No fetch in flight.
    Idle,
    /// A filter-change or page-navigation fetch is in flight.
    FetchingInitial,
    /// A load-more fetch is in flight.
    FetchingMore,
    /// The last page returned fewer than `page_size` items; load-more is
    /// disabled until the filters change.
    Exhausted,
}

impl Phase {
    /// Returns true while any fetch is in flight.
    #[must_use]
    pub fn is_fetching(self) -> bool {
        matches!(self, Self::FetchingInitial | Self::FetchingMore)
    }
}

/// Pagination state derived from fetch responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Current 1-based page number.
    pub page: u32,
    /// Items requested per page.
    pub page_size: u32,
    /// Total matching items, when the backend reported it.
    pub total: Option<u64>,
    /// Total pages, when the backend reported it.
    pub total_pages: Option<u32>,
    /// Whether another page may exist. Derived: the last fetch returned
    /// exactly `page_size` items.
    pub has_more: bool,
}

impl PageState {
    fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total: None,
            total_pages: None,
            has_more: true,
        }
    }
}

/// How a page of results merges into the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// Replace the result set wholesale (filter change, page navigation).
    Replace,
    /// Append to the result set (load-more).
    Append,
}

/// The complete browse state for one catalog view.
///
/// Owned exclusively by the controller; the rendering layer only reads
/// cloned snapshots.
#[derive(Debug, Clone)]
pub struct BrowseState {
    /// Monotonic filter generation. Responses carry the generation they
    /// were issued under; mismatches are dropped.
    pub generation: u64,
    /// The filters this generation was fetched with.
    pub filters: Filters,
    /// Fetch lifecycle phase.
    pub phase: Phase,
    /// Pagination state.
    pub page: PageState,
    /// The accumulated result set, in fetch order.
    pub items: Vec<ProductSummary>,
    /// Last fetch error, cleared by the next successful fetch.
    pub error: Option<String>,
}

impl BrowseState {
    /// Creates the mount-time state: default filters, page 1, no data.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            generation: 0,
            filters: Filters::default(),
            phase: Phase::Idle,
            page: PageState::new(page_size),
            items: Vec::new(),
            error: None,
        }
    }

    /// Load-more precondition: idle with data and more pages expected.
    #[must_use]
    pub fn should_load_more(&self) -> bool {
        self.phase == Phase::Idle && self.page.has_more && !self.items.is_empty()
    }

    /// Starts a new generation for a wholesale filter change.
    ///
    /// Clears the result set, resets the page cursor to 1 with an
    /// optimistic `has_more`, and returns the new generation token. Any
    /// response from an older generation will be dropped on arrival.
    pub fn begin_filter_change(&mut self, next: Filters) -> u64 {
        self.generation += 1;
        self.filters = next;
        self.phase = Phase::FetchingInitial;
        self.page = PageState::new(self.page.page_size);
        self.items.clear();
        self.error = None;
        self.generation
    }

    /// Starts a new generation for explicit page navigation under the
    /// current filters.
    ///
    /// The result set is kept on screen until the replacement page
    /// arrives. `n` below 1 is clamped rather than rejected; callers are
    /// expected to disable controls at the boundaries.
    pub fn begin_navigate(&mut self, n: u32) -> (u64, u32) {
        let target = n.max(1);
        self.generation += 1;
        self.phase = Phase::FetchingInitial;
        self.page.has_more = true;
        self.error = None;
        (self.generation, target)
    }

    /// Starts a load-more fetch for the next page, if the preconditions
    /// hold. Returns the generation and target page, or `None` when the
    /// call must be a no-op (already fetching, exhausted, or no data).
    pub fn begin_load_more(&mut self) -> Option<(u64, u32)> {
        if !self.should_load_more() {
            return None;
        }
        self.phase = Phase::FetchingMore;
        Some((self.generation, self.page.page + 1))
    }

    /// Merges a fetched page into the state.
    ///
    /// Returns `false` when the response belongs to a superseded
    /// generation and was dropped without touching any state.
    pub fn apply_page(
        &mut self,
        generation: u64,
        page_no: u32,
        merge: Merge,
        fetched: Page<ProductSummary>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }

        let full = fetched.is_full(self.page.page_size);
        match merge {
            Merge::Replace => self.items = fetched.data,
            Merge::Append => self.items.extend(fetched.data),
        }

        self.page.page = page_no;
        self.page.total = fetched.total;
        self.page.total_pages = fetched.total_pages;
        self.page.has_more = full;
        self.phase = if full { Phase::Idle } else { Phase::Exhausted };
        self.error = None;
        true
    }

    /// Records a fetch failure.
    ///
    /// Existing items and pagination state are left in place; the error
    /// becomes visible to the view and the controller returns to an
    /// actionable phase. Returns `false` for stale generations.
    pub fn apply_failure(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = if self.page.has_more {
            Phase::Idle
        } else {
            Phase::Exhausted
        };
        self.error = Some(message.into());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::id::ProductId;

    fn product(i: usize) -> ProductSummary {
        ProductSummary {
            id: ProductId::from(format!("p-{i}")),
            name: format!("Product {i}"),
            price: 100.0,
            original_price: None,
            image: String::new(),
            category: "Casual".into(),
            age_group: "2-4 years".into(),
            gender: "Unisex".into(),
            description: String::new(),
            rating: 4.0,
            review_count: 0,
            stock: 5,
        }
    }

    fn page(count: usize, total: u64) -> Page<ProductSummary> {
        Page {
            data: (0..count).map(product).collect(),
            total: Some(total),
            total_pages: Some(u32::try_from(total.div_ceil(12)).unwrap()),
            page: None,
        }
    }

    #[test]
    fn filter_change_resets_cursor_and_items() {
        let mut state = BrowseState::new(12);
        let gen1 = state.begin_filter_change(Filters::default());
        assert!(state.apply_page(gen1, 1, Merge::Replace, page(12, 30)));
        let gen2 = state.begin_load_more().map(|(g, p)| {
            assert_eq!(p, 2);
            g
        });
        assert!(state.apply_page(gen2.unwrap(), 2, Merge::Append, page(12, 30)));
        assert_eq!(state.items.len(), 24);

        let gen3 = state.begin_filter_change(Filters::default().with_category("Party"));
        assert_eq!(gen3, gen1 + 1);
        assert!(state.items.is_empty());
        assert_eq!(state.page.page, 1);
        assert!(state.page.has_more);
        assert_eq!(state.phase, Phase::FetchingInitial);
    }

    #[test]
    fn stale_generation_is_dropped_without_mutation() {
        let mut state = BrowseState::new(12);
        let old_gen = state.begin_filter_change(Filters::default());
        let new_gen = state.begin_filter_change(Filters::default().with_category("Party"));

        assert!(!state.apply_page(old_gen, 1, Merge::Replace, page(12, 30)));
        assert!(state.items.is_empty());

        assert!(state.apply_page(new_gen, 1, Merge::Replace, page(4, 4)));
        assert_eq!(state.items.len(), 4);
    }

    #[test]
    fn short_page_exhausts_load_more() {
        let mut state = BrowseState::new(12);
        let generation = state.begin_filter_change(Filters::default());
        assert!(state.apply_page(generation, 1, Merge::Replace, page(5, 5)));

        assert_eq!(state.phase, Phase::Exhausted);
        assert!(!state.page.has_more);
        assert!(state.begin_load_more().is_none());
    }

    #[test]
    fn load_more_is_refused_while_fetching() {
        let mut state = BrowseState::new(12);
        let generation = state.begin_filter_change(Filters::default());
        assert!(state.apply_page(generation, 1, Merge::Replace, page(12, 30)));

        let first = state.begin_load_more();
        assert!(first.is_some());
        // Second trigger while the first is in flight: no-op.
        assert!(state.begin_load_more().is_none());
    }

    #[test]
    fn failure_keeps_data_and_surfaces_message() {
        let mut state = BrowseState::new(12);
        let generation = state.begin_filter_change(Filters::default());
        assert!(state.apply_page(generation, 1, Merge::Replace, page(12, 30)));

        let (more_gen, _) = state.begin_load_more().unwrap();
        assert!(state.apply_failure(more_gen, "backend unavailable"));

        assert_eq!(state.items.len(), 12);
        assert_eq!(state.page.page, 1);
        assert_eq!(state.error.as_deref(), Some("backend unavailable"));
        // Recoverable: the next trigger may retry.
        assert!(state.should_load_more());
    }

    #[test]
    fn navigate_clamps_below_one() {
        let mut state = BrowseState::new(12);
        let (generation, target) = state.begin_navigate(0);
        assert_eq!(target, 1);
        assert!(state.apply_page(generation, target, Merge::Replace, page(12, 30)));
        assert_eq!(state.page.page, 1);
    }

    #[test]
    fn partial_envelope_degrades_metadata() {
        let mut state = BrowseState::new(12);
        let generation = state.begin_filter_change(Filters::default());
        let fetched = Page {
            data: (0..12).map(product).collect(),
            total: None,
            total_pages: None,
            page: None,
        };
        assert!(state.apply_page(generation, 1, Merge::Replace, fetched));
        assert_eq!(state.page.total, None);
        assert_eq!(state.page.total_pages, None);
        // has_more derivation is independent of the missing metadata.
        assert!(state.page.has_more);
    }
}

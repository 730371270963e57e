//! End-to-end controller behavior against a scripted catalog source.

mod support;

use std::sync::Arc;

use sprout_catalog::{CatalogBrowser, Filters, Phase};

use support::{FailingSource, FixtureSource, GatedSource};

const PAGE_SIZE: u32 = 12;

#[tokio::test]
async fn initial_fetch_loads_page_one() {
    let browser = CatalogBrowser::new(FixtureSource::storefront(), PAGE_SIZE);
    browser.set_filters(Filters::default()).await;

    let snap = browser.snapshot();
    assert_eq!(snap.items.len(), 12);
    assert_eq!(snap.page.page, 1);
    assert_eq!(snap.page.total, Some(30));
    assert_eq!(snap.page.total_pages, Some(3));
    assert!(snap.page.has_more);
    assert_eq!(snap.phase, Phase::Idle);
    assert_eq!(snap.error, None);
}

#[tokio::test]
async fn load_more_walks_every_page_then_exhausts() {
    let browser = CatalogBrowser::new(FixtureSource::storefront(), PAGE_SIZE);
    browser.set_filters(Filters::default()).await;

    assert!(browser.load_more().await);
    let snap = browser.snapshot();
    assert_eq!(snap.items.len(), 24);
    assert_eq!(snap.page.page, 2);
    assert!(snap.page.has_more);

    assert!(browser.load_more().await);
    let snap = browser.snapshot();
    assert_eq!(snap.items.len(), 30);
    assert_eq!(snap.page.page, 3);
    assert!(!snap.page.has_more);
    assert_eq!(snap.phase, Phase::Exhausted);

    // Exhausted is terminal for the load-more path.
    assert!(!browser.load_more().await);
    assert_eq!(browser.snapshot().items.len(), 30);
}

#[tokio::test]
async fn load_more_appends_in_order_without_duplicates() {
    let browser = CatalogBrowser::new(FixtureSource::storefront(), PAGE_SIZE);
    browser.set_filters(Filters::default()).await;
    browser.load_more().await;

    let snap = browser.snapshot();
    let ids: Vec<_> = snap.items.iter().map(|p| p.id.as_str().to_string()).collect();
    let mut deduped = ids.clone();
    deduped.dedup();
    assert_eq!(ids, deduped, "append must preserve order and never duplicate");
    assert_eq!(ids[0], "casual-0");
    assert_eq!(ids[12], "casual-12");
}

#[tokio::test]
async fn filter_change_resets_pagination_and_replaces_results() {
    let browser = CatalogBrowser::new(FixtureSource::storefront(), PAGE_SIZE);
    browser.set_filters(Filters::default()).await;
    browser.load_more().await;
    assert_eq!(browser.snapshot().items.len(), 24);

    browser
        .set_filters(Filters::default().with_category("Traditional"))
        .await;

    let snap = browser.snapshot();
    assert_eq!(snap.page.page, 1);
    assert_eq!(snap.items.len(), 4);
    assert_eq!(snap.page.total, Some(4));
    assert!(!snap.page.has_more);
    assert!(snap.items.iter().all(|p| p.category == "Traditional"));
}

#[tokio::test]
async fn stale_filter_response_is_discarded() {
    // Hold the default-filter fetch, supersede it, then release it late.
    let (source, gate) = GatedSource::new(FixtureSource::storefront(), "All");
    let browser = Arc::new(CatalogBrowser::new(source, PAGE_SIZE));

    let slow = {
        let browser = browser.clone();
        tokio::spawn(async move { browser.set_filters(Filters::default()).await })
    };
    // Let the slow fetch reach its suspension point.
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }

    browser
        .set_filters(Filters::default().with_category("Traditional"))
        .await;
    assert_eq!(browser.snapshot().items.len(), 4);

    gate.notify_one();
    slow.await.unwrap();

    // The late response must not clobber the newer generation.
    let snap = browser.snapshot();
    assert_eq!(snap.items.len(), 4);
    assert!(snap.items.iter().all(|p| p.category == "Traditional"));
    assert_eq!(snap.page.page, 1);
}

#[tokio::test]
async fn load_more_is_a_no_op_while_one_is_in_flight() {
    let (source, gate) = GatedSource::new(FixtureSource::storefront(), "All");
    let browser = Arc::new(CatalogBrowser::new(source, PAGE_SIZE));

    // Let the initial fetch through the gate.
    gate.notify_one();
    browser.set_filters(Filters::default()).await;
    assert_eq!(browser.snapshot().items.len(), 12);

    let in_flight = {
        let browser = browser.clone();
        tokio::spawn(async move { browser.load_more().await })
    };
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }

    // Second trigger while the first is suspended: refused.
    assert!(!browser.load_more().await);

    gate.notify_one();
    assert!(in_flight.await.unwrap());

    let snap = browser.snapshot();
    assert_eq!(snap.items.len(), 24, "exactly one page appended");
    assert_eq!(snap.page.page, 2);
}

#[tokio::test]
async fn explicit_navigation_replaces_instead_of_appending() {
    let browser = CatalogBrowser::new(FixtureSource::storefront(), PAGE_SIZE);
    browser.set_filters(Filters::default()).await;

    browser.load_page(3).await;

    let snap = browser.snapshot();
    assert_eq!(snap.page.page, 3);
    assert_eq!(snap.items.len(), 6, "navigation is non-cumulative");
    assert_eq!(snap.items[0].id.as_str(), "casual-24");
}

#[tokio::test]
async fn search_narrow_filters_the_view_without_fetching() {
    let browser = CatalogBrowser::new(FixtureSource::storefront(), PAGE_SIZE);
    browser.set_filters(Filters::default()).await;
    let fetches_before = browser.snapshot().generation;

    let narrowed = browser.search_narrow("outfit 3");
    assert!(narrowed.iter().all(|p| p.name.to_lowercase().contains("outfit 3")));
    assert!(!narrowed.is_empty());

    // Case-insensitive, matches category text too.
    let by_category = browser.search_narrow("CASUAL");
    assert_eq!(by_category.len(), 12);

    // No fetch happened and the result set is untouched.
    let snap = browser.snapshot();
    assert_eq!(snap.generation, fetches_before);
    assert_eq!(snap.items.len(), 12);
    assert_eq!(snap.page.page, 1);
}

#[tokio::test]
async fn fetch_failure_surfaces_error_and_recovers_on_retry() {
    let browser = CatalogBrowser::new(FailingSource, PAGE_SIZE);
    browser.set_filters(Filters::default()).await;

    let snap = browser.snapshot();
    assert!(snap.items.is_empty());
    assert_eq!(
        snap.error.as_deref(),
        Some("api error (503): failed to fetch products")
    );
    assert_eq!(snap.phase, Phase::Idle, "controller stays usable after a failure");
}

#[tokio::test]
async fn reset_filters_restores_defaults() {
    let browser = CatalogBrowser::new(FixtureSource::storefront(), PAGE_SIZE);
    browser
        .set_filters(Filters::default().with_category("Traditional"))
        .await;
    assert_eq!(browser.snapshot().items.len(), 4);

    browser.reset_filters().await;

    let snap = browser.snapshot();
    assert!(snap.filters.is_default());
    assert_eq!(snap.items.len(), 12);
    assert_eq!(snap.page.total, Some(30));
}

#[tokio::test]
async fn empty_result_is_a_state_not_an_error() {
    let browser = CatalogBrowser::new(FixtureSource::new(Vec::new()), PAGE_SIZE);
    browser.set_filters(Filters::default()).await;

    let snap = browser.snapshot();
    assert!(snap.items.is_empty());
    assert_eq!(snap.error, None);
    assert_eq!(snap.phase, Phase::Exhausted);
    assert!(!snap.page.has_more);
}

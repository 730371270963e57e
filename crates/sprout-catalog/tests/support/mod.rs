//! Scripted in-memory catalog sources for controller tests.
#![allow(dead_code)] // each test binary uses a different subset

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use sprout_catalog::{CatalogSource, Filters};
use sprout_core::error::{Error, Result};
use sprout_core::id::ProductId;
use sprout_core::page::Page;
use sprout_core::product::ProductSummary;

pub fn product(i: usize, category: &str) -> ProductSummary {
    ProductSummary {
        id: ProductId::from(format!("{}-{i}", category.to_lowercase())),
        name: format!("{category} Outfit {i}"),
        price: 250.0 + i as f64,
        original_price: None,
        image: format!("https://img.example/{i}.jpg"),
        category: category.to_string(),
        age_group: "2-4 years".to_string(),
        gender: "Unisex".to_string(),
        description: format!("Comfy {category} outfit number {i}"),
        rating: 4.2,
        review_count: 3,
        stock: 10,
    }
}

/// Serves a fixed catalog, honoring category filtering and skip/take
/// paging the way the backend does.
pub struct FixtureSource {
    catalog: Vec<ProductSummary>,
    calls: AtomicUsize,
}

impl FixtureSource {
    pub fn new(catalog: Vec<ProductSummary>) -> Self {
        Self {
            catalog,
            calls: AtomicUsize::new(0),
        }
    }

    /// A 30-item catalog of which 4 are `Traditional`: three pages of 12
    /// under default filters, one short page when narrowed.
    pub fn storefront() -> Self {
        let mut catalog: Vec<_> = (0..26).map(|i| product(i, "Casual")).collect();
        catalog.extend((0..4).map(|i| product(i, "Traditional")));
        Self::new(catalog)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn matching(&self, filters: &Filters) -> Vec<ProductSummary> {
        self.catalog
            .iter()
            .filter(|p| filters.category == "All" || p.category == filters.category)
            .filter(|p| {
                let price = p.price.round() as u32;
                price >= filters.price_range.min && price <= filters.price_range.max
            })
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CatalogSource for FixtureSource {
    async fn fetch_page(
        &self,
        filters: &Filters,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ProductSummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let matching = self.matching(filters);
        let total = matching.len() as u64;
        let skip = ((page - 1) * page_size) as usize;
        let data: Vec<_> = matching
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect();

        Ok(Page {
            data,
            total: Some(total),
            total_pages: Some(u32::try_from(total.div_ceil(u64::from(page_size))).unwrap()),
            page: Some(page),
        })
    }
}

/// Wraps a [`FixtureSource`] and holds responses for one category until
/// released, to script slow-response races.
pub struct GatedSource {
    inner: FixtureSource,
    gated_category: String,
    gate: Arc<Notify>,
}

impl GatedSource {
    pub fn new(inner: FixtureSource, gated_category: &str) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        (
            Self {
                inner,
                gated_category: gated_category.to_string(),
                gate: gate.clone(),
            },
            gate,
        )
    }
}

#[async_trait]
impl CatalogSource for GatedSource {
    async fn fetch_page(
        &self,
        filters: &Filters,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ProductSummary>> {
        if filters.category == self.gated_category {
            self.gate.notified().await;
        }
        self.inner.fetch_page(filters, page, page_size).await
    }
}

/// Always fails, for error-surface tests.
pub struct FailingSource;

#[async_trait]
impl CatalogSource for FailingSource {
    async fn fetch_page(&self, _: &Filters, _: u32, _: u32) -> Result<Page<ProductSummary>> {
        Err(Error::api(503, None, "failed to fetch products"))
    }
}

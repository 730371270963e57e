//! Filter state and its wire encoding.
//!
//! A filter field equal to its `All`/default sentinel is omitted from the
//! request so the backend applies no constraint for it. The price range is
//! always sent, and paging is always sent as `skip`/`take`.

use serde::{Deserialize, Serialize};

/// Upper bound of the default price range, in rupees.
pub const DEFAULT_PRICE_CEILING: u32 = 5000;

/// The sentinel value meaning "no constraint" for category, age group,
/// and gender.
pub const ALL: &str = "All";

/// Sort order for the product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sort {
    /// Backend's curated default ordering.
    #[default]
    #[serde(rename = "featured")]
    Featured,
    /// Cheapest first.
    #[serde(rename = "price-low")]
    PriceLow,
    /// Most expensive first.
    #[serde(rename = "price-high")]
    PriceHigh,
    /// Best rated first.
    #[serde(rename = "rating")]
    Rating,
    /// Most recently added first.
    #[serde(rename = "newest")]
    Newest,
}

impl Sort {
    /// Wire name sent as `sortBy`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }
}

/// An inclusive price window in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound.
    pub min: u32,
    /// Upper bound.
    pub max: u32,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_PRICE_CEILING,
        }
    }
}

/// The complete filter selection for the product list.
///
/// Mutated wholesale: the filter UI hands the controller a whole new
/// `Filters` value on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// Category name, or `All`.
    pub category: String,
    /// Age group label, or `All`.
    pub age_group: String,
    /// Gender label, or `All`.
    pub gender: String,
    /// Price window, always applied.
    pub price_range: PriceRange,
    /// Sort order.
    pub sort: Sort,
    /// Free-text search supplied by the search box, if any.
    pub search: Option<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            age_group: ALL.to_string(),
            gender: ALL.to_string(),
            price_range: PriceRange::default(),
            sort: Sort::default(),
            search: None,
        }
    }
}

impl Filters {
    /// Returns a builder-style copy with the category replaced.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns a builder-style copy with the search text replaced.
    /// An empty string removes the search constraint.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }

    /// Returns true when every field is at its default sentinel.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Builds the query string pairs for one page fetch.
    ///
    /// Only non-default fields are included; the price window and paging
    /// are always included. `page` is 1-based; the backend takes a
    /// `skip`/`take` window.
    #[must_use]
    pub fn to_query(&self, page: u32, page_size: u32) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if self.category != ALL {
            query.push(("category", self.category.clone()));
        }
        if self.age_group != ALL {
            query.push(("ageGroup", self.age_group.clone()));
        }
        if self.gender != ALL {
            query.push(("gender", self.gender.clone()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query.push(("search", search.to_string()));
        }
        if self.sort != Sort::Featured {
            query.push(("sortBy", self.sort.as_str().to_string()));
            query.push(("sortOrder", "desc".to_string()));
        }

        query.push(("minPrice", self.price_range.min.to_string()));
        query.push(("maxPrice", self.price_range.max.to_string()));

        let skip = u64::from(page.saturating_sub(1)) * u64::from(page_size);
        query.push(("skip", skip.to_string()));
        query.push(("take", page_size.to_string()));

        query
    }
}

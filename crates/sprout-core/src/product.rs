//! Product records.
//!
//! Read-only projections of the backend product documents. The client
//! never mutates these; the admin write payloads are separate types.

use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// A product as it appears in listing pages.
///
/// This is the shape the catalog controller accumulates; detail pages use
/// the richer [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price in rupees.
    pub price: f64,
    /// Pre-discount price, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Primary image URL.
    pub image: String,
    /// Category name (e.g. `Traditional`).
    pub category: String,
    /// Age group label (e.g. `2-4 years`).
    pub age_group: String,
    /// Gender label (`Boys`, `Girls`, `Unisex`).
    pub gender: String,
    /// Marketing description.
    #[serde(default)]
    pub description: String,
    /// Average review rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind the rating.
    #[serde(default, rename = "reviews")]
    pub review_count: u32,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
}

impl ProductSummary {
    /// Returns true when the product is discounted.
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.original_price.is_some_and(|orig| orig > self.price)
    }

    /// Returns true when the product can be added to a cart.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Full product detail, as returned by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The listing projection.
    #[serde(flatten)]
    pub summary: ProductSummary,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Available sizes.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Available colors.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Bullet-point features.
    #[serde(default)]
    pub features: Vec<String>,
}

/// Payload for creating a product (admin).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Price in rupees.
    pub price: f64,
    /// Pre-discount price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Primary image URL.
    pub image: String,
    /// Category name.
    pub category: String,
    /// Age group label.
    pub age_group: String,
    /// Gender label.
    pub gender: String,
    /// Marketing description.
    pub description: String,
    /// Bullet-point features.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Units in stock.
    pub stock: u32,
}

/// Partial update for a product (admin). Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New price in rupees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New stock level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_json() -> serde_json::Value {
        serde_json::json!({
            "_id": "p-1",
            "name": "Cotton Romper",
            "price": 499.0,
            "originalPrice": 699.0,
            "image": "https://img.example/p-1.jpg",
            "category": "Casual",
            "ageGroup": "0-2 years",
            "gender": "Unisex",
            "description": "Soft everyday romper",
            "rating": 4.5,
            "reviews": 12,
            "stock": 8
        })
    }

    #[test]
    fn summary_deserializes_from_backend_shape() {
        let p: ProductSummary = serde_json::from_value(summary_json()).unwrap();
        assert_eq!(p.id.as_str(), "p-1");
        assert_eq!(p.age_group, "0-2 years");
        assert_eq!(p.review_count, 12);
        assert!(p.on_sale());
        assert!(p.in_stock());
    }

    #[test]
    fn missing_optional_fields_default() {
        let mut json = summary_json();
        let obj = json.as_object_mut().unwrap();
        obj.remove("originalPrice");
        obj.remove("rating");
        obj.remove("reviews");
        obj.remove("stock");

        let p: ProductSummary = serde_json::from_value(json).unwrap();
        assert!(!p.on_sale());
        assert!(!p.in_stock());
        assert_eq!(p.review_count, 0);
    }

    #[test]
    fn detail_flattens_summary() {
        let mut json = summary_json();
        json.as_object_mut().unwrap().insert(
            "sizes".into(),
            serde_json::json!(["0-3m", "3-6m"]),
        );

        let p: Product = serde_json::from_value(json).unwrap();
        assert_eq!(p.summary.name, "Cotton Romper");
        assert_eq!(p.sizes, vec!["0-3m", "3-6m"]);
    }
}

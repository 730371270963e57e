//! Product endpoints: listing, detail, and admin CRUD.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use sprout_catalog::{CatalogSource, Filters};
use sprout_core::error::Result;
use sprout_core::id::ProductId;
use sprout_core::page::Page;
use sprout_core::product::{NewProduct, Product, ProductPatch, ProductSummary};

use crate::{Ack, StorefrontClient};

/// Response of `GET /products/total-count`.
#[derive(Debug, Deserialize)]
struct TotalCount {
    total: u64,
}

/// Bulk update payload: the same patch applied to many products.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkUpdate<'a> {
    ids: &'a [ProductId],
    product_data: &'a ProductPatch,
}

#[derive(Debug, Serialize)]
struct BulkDelete<'a> {
    ids: &'a [ProductId],
}

impl StorefrontClient {
    /// Fetches one page of the product listing.
    ///
    /// Filter fields at their `All`/default sentinel are omitted from the
    /// query so the backend applies no constraint for them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the envelope cannot be
    /// parsed.
    pub async fn list_products(
        &self,
        filters: &Filters,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ProductSummary>> {
        self.get_json(
            "/products",
            &filters.to_query(page, page_size),
            "failed to fetch products",
        )
        .await
    }

    /// Fetches full detail for one product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the product is unknown.
    pub async fn product(&self, id: &ProductId) -> Result<Product> {
        self.get_json(&format!("/products/{id}"), &[], "failed to fetch product")
            .await
    }

    /// Returns the total number of products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn product_count(&self) -> Result<u64> {
        let count: TotalCount = self
            .get_json("/products/total-count", &[], "failed to get total count")
            .await?;
        Ok(count.total)
    }

    /// Creates a product (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the caller lacks the
    /// admin role.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        self.send_json(
            Method::POST,
            "/products",
            Some(product),
            "failed to add product",
        )
        .await
    }

    /// Imports many products in one call (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_products(&self, products: &[NewProduct]) -> Result<Vec<Product>> {
        self.send_json(
            Method::POST,
            "/products/bulk",
            Some(products),
            "failed to add products",
        )
        .await
    }

    /// Applies a partial update to one product (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_product(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product> {
        self.send_json(
            Method::PUT,
            &format!("/products/{id}"),
            Some(patch),
            "failed to update product",
        )
        .await
    }

    /// Applies the same patch to many products (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_products(&self, ids: &[ProductId], patch: &ProductPatch) -> Result<Ack> {
        self.send_json(
            Method::PUT,
            "/products",
            Some(&BulkUpdate {
                ids,
                product_data: patch,
            }),
            "failed to update products",
        )
        .await
    }

    /// Deletes one product (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_product(&self, id: &ProductId) -> Result<Ack> {
        self.send_json::<Ack, ()>(
            Method::DELETE,
            &format!("/products/{id}"),
            None,
            "failed to delete product",
        )
        .await
    }

    /// Deletes many products in one call (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_products(&self, ids: &[ProductId]) -> Result<Ack> {
        self.send_json(
            Method::DELETE,
            "/products",
            Some(&BulkDelete { ids }),
            "failed to delete products",
        )
        .await
    }
}

#[async_trait]
impl CatalogSource for StorefrontClient {
    async fn fetch_page(
        &self,
        filters: &Filters,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ProductSummary>> {
        self.list_products(filters, page, page_size).await
    }
}

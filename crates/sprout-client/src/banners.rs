//! Banner endpoints: the hero carousel and promo slots.
//!
//! Banner responses wrap their payload as `{ data }`, unlike the flat
//! records of the other endpoint groups.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use sprout_core::banner::{Banner, BannerKind, BannerPatch, BannerPosition, NewBanner};
use sprout_core::error::Result;
use sprout_core::id::BannerId;

use crate::{Ack, StorefrontClient};

#[derive(Debug, Deserialize)]
struct Wrapped<T> {
    data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusToggle {
    is_active: bool,
}

/// Query selection for the banner listings.
///
/// Unset fields are omitted so the backend applies no constraint for
/// them. `active`, `page`, and `limit` apply to the full listing only;
/// `/banners/active` takes just the kind/position/tags selection.
#[derive(Debug, Clone, Default)]
pub struct BannerFilters {
    /// Restrict to one surface.
    pub kind: Option<BannerKind>,
    /// Restrict to one vertical slot.
    pub position: Option<BannerPosition>,
    /// Restrict by activation flag (full listing only).
    pub active: Option<bool>,
    /// Restrict to banners carrying all of these tags.
    pub tags: Vec<String>,
    /// 1-based page (full listing only).
    pub page: Option<u32>,
    /// Items per page (full listing only).
    pub limit: Option<u32>,
}

impl BannerFilters {
    fn selection_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(kind) = self.kind {
            query.push(("type", kind.as_str().to_string()));
        }
        if let Some(position) = self.position {
            query.push(("position", position.as_str().to_string()));
        }
        for tag in &self.tags {
            query.push(("tags", tag.clone()));
        }
        query
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.selection_query();
        if let Some(active) = self.active {
            query.push(("isActive", active.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

impl StorefrontClient {
    /// Fetches banners matching the given selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn banners(&self, filters: &BannerFilters) -> Result<Vec<Banner>> {
        let wrapped: Wrapped<Vec<Banner>> = self
            .get_json("/banners", &filters.to_query(), "failed to fetch banners")
            .await?;
        Ok(wrapped.data)
    }

    /// Fetches the currently live banners, the set the hero carousel
    /// renders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn active_banners(&self, filters: &BannerFilters) -> Result<Vec<Banner>> {
        let wrapped: Wrapped<Vec<Banner>> = self
            .get_json(
                "/banners/active",
                &filters.selection_query(),
                "failed to fetch active banners",
            )
            .await?;
        Ok(wrapped.data)
    }

    /// Fetches one banner.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the banner is unknown.
    pub async fn banner(&self, id: &BannerId) -> Result<Banner> {
        let wrapped: Wrapped<Banner> = self
            .get_json(&format!("/banners/{id}"), &[], "failed to fetch banner")
            .await?;
        Ok(wrapped.data)
    }

    /// Creates a banner (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_banner(&self, banner: &NewBanner) -> Result<Banner> {
        let wrapped: Wrapped<Banner> = self
            .send_json(
                Method::POST,
                "/banners",
                Some(banner),
                "failed to create banner",
            )
            .await?;
        Ok(wrapped.data)
    }

    /// Applies a partial update to one banner (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update_banner(&self, id: &BannerId, patch: &BannerPatch) -> Result<Banner> {
        let wrapped: Wrapped<Banner> = self
            .send_json(
                Method::PUT,
                &format!("/banners/{id}"),
                Some(patch),
                "failed to update banner",
            )
            .await?;
        Ok(wrapped.data)
    }

    /// Deletes a banner (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_banner(&self, id: &BannerId) -> Result<Ack> {
        self.send_json::<Ack, ()>(
            Method::DELETE,
            &format!("/banners/{id}"),
            None,
            "failed to delete banner",
        )
        .await
    }

    /// Switches a banner on or off (admin).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn set_banner_status(&self, id: &BannerId, active: bool) -> Result<Banner> {
        let wrapped: Wrapped<Banner> = self
            .send_json(
                Method::PATCH,
                &format!("/banners/{id}/status"),
                Some(&StatusToggle { is_active: active }),
                "failed to update banner status",
            )
            .await?;
        Ok(wrapped.data)
    }
}

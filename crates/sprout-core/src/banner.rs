//! Promotional banner records.
//!
//! Banners feed the hero carousel and the promo slots. The client only
//! renders them; scheduling and activation are backend concerns, surfaced
//! here as plain fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::BannerId;

/// The surface a banner renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerKind {
    /// Full-width hero carousel slide.
    Hero,
    /// Inline promotional strip.
    PromoBanner,
    /// Sidebar tile.
    SidebarBanner,
}

impl BannerKind {
    /// Wire name, as used in the `type` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::PromoBanner => "promo_banner",
            Self::SidebarBanner => "sidebar_banner",
        }
    }
}

/// Vertical slot within the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerPosition {
    /// Above the fold.
    Top,
    /// Mid-page.
    Middle,
    /// Below the product grid.
    Bottom,
}

impl BannerPosition {
    /// Wire name, as used in the `position` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// A promotional banner, as returned by the banner endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: BannerId,
    /// Headline.
    pub title: String,
    /// Secondary line under the headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Longer marketing copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Desktop image URL.
    pub image_url: String,
    /// Narrow-viewport image URL, when a separate crop exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_image_url: Option<String>,
    /// Destination when the banner is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Call-to-action label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Surface the banner renders on.
    #[serde(rename = "type")]
    pub kind: BannerKind,
    /// Vertical slot.
    pub position: BannerPosition,
    /// Start of the scheduling window, when one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// End of the scheduling window, when one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Whether the banner is switched on.
    pub is_active: bool,
    /// Ordering weight within a slot; higher renders first.
    #[serde(default)]
    pub priority: i32,
    /// Free-form labels for targeting.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-modified timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Banner {
    /// Returns true when the banner is switched on and `now` falls inside
    /// its scheduling window. Missing bounds are open-ended.
    #[must_use]
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.start_date.map_or(true, |start| start <= now)
            && self.end_date.map_or(true, |end| now <= end)
    }
}

/// Payload for creating a banner (admin).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBanner {
    /// Headline.
    pub title: String,
    /// Secondary line under the headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Longer marketing copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Desktop image URL.
    pub image_url: String,
    /// Destination when the banner is clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Call-to-action label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Surface the banner renders on.
    #[serde(rename = "type")]
    pub kind: BannerKind,
    /// Vertical slot.
    pub position: BannerPosition,
    /// Whether the banner starts switched on.
    pub is_active: bool,
    /// Ordering weight within a slot.
    pub priority: i32,
    /// Free-form labels for targeting.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Partial update for a banner (admin). Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerPatch {
    /// New headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New desktop image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// New click destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// New vertical slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<BannerPosition>,
    /// New ordering weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner_json() -> serde_json::Value {
        serde_json::json!({
            "_id": "b-1",
            "title": "Monsoon Sale",
            "subtitle": "Up to 40% off",
            "imageUrl": "https://img.example/b-1.jpg",
            "type": "hero",
            "position": "top",
            "isActive": true,
            "priority": 5,
            "tags": ["sale", "monsoon"]
        })
    }

    #[test]
    fn banner_deserializes_from_backend_shape() {
        let b: Banner = serde_json::from_value(banner_json()).unwrap();
        assert_eq!(b.id.as_str(), "b-1");
        assert_eq!(b.kind, BannerKind::Hero);
        assert_eq!(b.position, BannerPosition::Top);
        assert!(b.is_active);
        assert_eq!(b.tags, vec!["sale", "monsoon"]);
    }

    #[test]
    fn kind_uses_snake_case_wire_names() {
        let k: BannerKind = serde_json::from_str("\"promo_banner\"").unwrap();
        assert_eq!(k, BannerKind::PromoBanner);
        assert_eq!(k.as_str(), "promo_banner");
    }

    #[test]
    fn liveness_honors_the_schedule_window() {
        let mut b: Banner = serde_json::from_value(banner_json()).unwrap();
        let now = chrono::Utc::now();
        assert!(b.is_live(now));

        b.end_date = Some(now - chrono::Duration::hours(1));
        assert!(!b.is_live(now));

        b.end_date = None;
        b.is_active = false;
        assert!(!b.is_live(now));
    }
}

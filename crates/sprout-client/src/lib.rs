//! # sprout-client
//!
//! Typed HTTP bindings for the Sprout storefront REST API.
//!
//! One [`StorefrontClient`] covers every endpoint group the storefront
//! consumes:
//!
//! - `products` - catalog listing, detail, and admin CRUD
//! - `categories` - category listing and admin CRUD
//! - `banners` - hero carousel and promo slots, plus admin CRUD
//! - `cart` / `wishlist` - the shopper's saved items
//! - `orders` - checkout, history, and admin reports
//! - `auth` - register, login, current user
//! - `payment` - gateway order creation and verification
//!
//! The client holds an optional bearer credential supplied by the session
//! provider and attaches it to every request. Non-2xx responses surface
//! the backend's `{ message }` when present, or a per-operation fallback.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sprout_client::StorefrontClient;
//! use sprout_catalog::Filters;
//!
//! # async fn example() -> sprout_core::Result<()> {
//! let client = StorefrontClient::builder("http://localhost:5000/api").build()?;
//! let page = client.list_products(&Filters::default(), 1, 12).await?;
//! println!("{} products", page.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod auth;
pub mod banners;
pub mod cart;
pub mod categories;
pub mod orders;
pub mod payment;
pub mod products;
pub mod wishlist;

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use sprout_core::error::{Error, Result};
use sprout_core::observability::api_span;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`StorefrontClient`].
#[derive(Debug)]
pub struct StorefrontClientBuilder {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl StorefrontClientBuilder {
    /// Sets the bearer credential attached to every request.
    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<StorefrontClient> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::transport("failed to create HTTP client", e))?;

        Ok(StorefrontClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(self.token),
        })
    }
}

/// API client for the storefront backend.
pub struct StorefrontClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl StorefrontClient {
    /// Starts building a client for the given API base URL
    /// (e.g. `http://localhost:5000/api`).
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> StorefrontClientBuilder {
        StorefrontClientBuilder {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the bearer credential (after a login).
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token_slot() = Some(token.into());
    }

    /// Clears the bearer credential (after a logout).
    pub fn clear_token(&self) {
        *self.token_slot() = None;
    }

    /// Returns true when a bearer credential is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn token_slot(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        self.token.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let mut req = self.http.get(&url);
        if !query.is_empty() {
            req = req.query(query);
        }
        self.dispatch(Method::GET, path, req, fallback).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let mut req = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            req = req.json(body);
        }
        self.dispatch(method, path, req, fallback).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        mut req: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<T> {
        if let Some(token) = self.bearer() {
            req = req.bearer_auth(token);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::transport(format!("request to {path} failed"), e))?;

        let status = response.status();
        {
            let span = api_span(method.as_str(), path);
            let _guard = span.enter();
            tracing::debug!(status = status.as_u16(), "storefront response");
        }

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| Error::decode(format!("invalid response from {path}: {e}")))
        } else {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            Err(Error::api(status.as_u16(), message, fallback))
        }
    }
}

impl std::fmt::Debug for StorefrontClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontClient")
            .field("base_url", &self.base_url)
            .field(
                "token",
                &self.bearer().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

/// The backend's error body, `{ "message": "..." }`.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// An empty or ignorable response body.
///
/// Delete endpoints return `{ message }` acknowledgements; this swallows
/// any shape.
#[derive(Debug, serde::Deserialize)]
pub struct Ack {
    /// Acknowledgement message, when the backend sends one.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_trims_trailing_slash() {
        let client = StorefrontClient::builder("http://localhost:5000/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn debug_redacts_token() {
        let client = StorefrontClient::builder("http://localhost:5000/api")
            .bearer_token("secret")
            .build()
            .unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn token_lifecycle() {
        let client = StorefrontClient::builder("http://localhost:5000/api")
            .build()
            .unwrap();
        assert!(!client.is_authenticated());
        client.set_token("jwt");
        assert!(client.is_authenticated());
        client.clear_token();
        assert!(!client.is_authenticated());
    }
}

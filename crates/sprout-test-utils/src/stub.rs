//! An in-process stand-in for the storefront backend.
//!
//! Implements just enough of the REST contract to exercise the HTTP
//! bindings over a real socket: product listing with filter/skip/take,
//! product detail, total count, cart, and auth. Every listing query is
//! captured so tests can assert what actually went over the wire.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;

use sprout_core::banner::Banner;
use sprout_core::cart::CartItem;
use sprout_core::product::ProductSummary;

use crate::fixtures;

/// The bearer token the stub's login endpoint issues.
pub const STUB_TOKEN: &str = "stub-token";
/// The one password the stub's login endpoint accepts.
pub const STUB_PASSWORD: &str = "letmein";

struct StubState {
    catalog: Vec<ProductSummary>,
    banners: Vec<Banner>,
    cart: Mutex<Vec<CartItem>>,
    queries: Mutex<Vec<HashMap<String, String>>>,
}

/// Builder for the stub backend.
pub struct StubStorefront {
    state: Arc<StubState>,
}

impl StubStorefront {
    /// A stub serving `n` fixture products.
    pub fn with_catalog(n: usize) -> Self {
        Self::new(fixtures::catalog(n))
    }

    /// A stub serving the given products and four fixture banners.
    pub fn new(catalog: Vec<ProductSummary>) -> Self {
        Self {
            state: Arc::new(StubState {
                catalog,
                banners: fixtures::banners(4),
                cart: Mutex::new(Vec::new()),
                queries: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Binds an ephemeral loopback port and serves until dropped.
    pub async fn spawn(self) -> RunningStub {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");

        let api = Router::new()
            .route("/products", get(list_products))
            .route("/products/total-count", get(total_count))
            .route("/products/:id", get(product_detail))
            .route("/banners", get(list_banners))
            .route("/banners/active", get(active_banners))
            .route(
                "/cart",
                get(get_cart).post(add_to_cart).delete(clear_cart),
            )
            .route("/auth/login", axum::routing::post(login))
            .route("/auth/me", get(me))
            .with_state(self.state.clone());
        let router = Router::new().nest("/api", api);

        let task = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub serve");
        });

        RunningStub {
            addr,
            state: self.state,
            task,
        }
    }
}

/// A running stub bound to a loopback port.
pub struct RunningStub {
    addr: SocketAddr,
    state: Arc<StubState>,
    task: tokio::task::JoinHandle<()>,
}

impl RunningStub {
    /// The API base URL to hand to a client.
    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Every `/products` query string received so far.
    pub fn captured_queries(&self) -> Vec<HashMap<String, String>> {
        self.state.queries.lock().unwrap().clone()
    }
}

impl Drop for RunningStub {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

async fn list_products(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.queries.lock().unwrap().push(params.clone());

    let min_price: f64 = params
        .get("minPrice")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0);
    let max_price: f64 = params
        .get("maxPrice")
        .and_then(|v| v.parse().ok())
        .unwrap_or(f64::MAX);
    let skip: usize = params
        .get("skip")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let take: usize = params
        .get("take")
        .and_then(|v| v.parse().ok())
        .unwrap_or(12);

    let matching: Vec<_> = state
        .catalog
        .iter()
        .filter(|p| params.get("category").map_or(true, |c| &p.category == c))
        .filter(|p| params.get("ageGroup").map_or(true, |a| &p.age_group == a))
        .filter(|p| params.get("gender").map_or(true, |g| &p.gender == g))
        .filter(|p| {
            params
                .get("search")
                .map_or(true, |s| p.name.to_lowercase().contains(&s.to_lowercase()))
        })
        .filter(|p| p.price >= min_price && p.price <= max_price)
        .cloned()
        .collect();

    let total = matching.len();
    let total_pages = total.div_ceil(take.max(1));
    let data: Vec<_> = matching.into_iter().skip(skip).take(take).collect();

    Json(json!({
        "data": data,
        "total": total,
        "totalPages": total_pages,
    }))
    .into_response()
}

async fn total_count(State(state): State<Arc<StubState>>) -> Response {
    Json(json!({ "total": state.catalog.len() })).into_response()
}

async fn product_detail(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
) -> Response {
    match state.catalog.iter().find(|p| p.id.as_str() == id) {
        Some(summary) => Json(fixtures::detail(summary.clone())).into_response(),
        None => error_body(StatusCode::NOT_FOUND, "Product not found"),
    }
}

async fn list_banners(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let banners: Vec<_> = state
        .banners
        .iter()
        .filter(|b| {
            params
                .get("isActive")
                .map_or(true, |v| v == if b.is_active { "true" } else { "false" })
        })
        .filter(|b| params.get("position").map_or(true, |p| b.position.as_str() == p))
        .cloned()
        .collect();
    Json(json!({ "data": banners })).into_response()
}

async fn active_banners(State(state): State<Arc<StubState>>) -> Response {
    let banners: Vec<_> = state.banners.iter().filter(|b| b.is_active).cloned().collect();
    Json(json!({ "data": banners })).into_response()
}

async fn get_cart(State(state): State<Arc<StubState>>) -> Response {
    let items = state.cart.lock().unwrap().clone();
    Json(json!({ "items": items })).into_response()
}

async fn add_to_cart(
    State(state): State<Arc<StubState>>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let Some(product_id) = body.get("productId").and_then(|v| v.as_str()) else {
        return error_body(StatusCode::BAD_REQUEST, "productId is required");
    };
    let quantity = body.get("quantity").and_then(serde_json::Value::as_u64).unwrap_or(1);

    let Some(product) = state.catalog.iter().find(|p| p.id.as_str() == product_id) else {
        return error_body(StatusCode::NOT_FOUND, "Product not found");
    };

    let mut cart = state.cart.lock().unwrap();
    cart.push(CartItem {
        product_id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        image: product.image.clone(),
        quantity: u32::try_from(quantity).unwrap_or(1),
        selected_size: None,
        selected_color: None,
    });
    Json(json!({ "items": *cart })).into_response()
}

async fn clear_cart(State(state): State<Arc<StubState>>) -> Response {
    state.cart.lock().unwrap().clear();
    Json(json!({ "message": "cart cleared" })).into_response()
}

async fn login(Json(body): Json<serde_json::Value>) -> Response {
    let email = body.get("email").and_then(|v| v.as_str()).unwrap_or_default();
    let password = body.get("password").and_then(|v| v.as_str());

    if password == Some(STUB_PASSWORD) {
        Json(json!({
            "token": STUB_TOKEN,
            "user": { "_id": "user-1", "name": "Stub User", "email": email, "role": "user" },
        }))
        .into_response()
    } else {
        error_body(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }
}

async fn me(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(STUB_TOKEN) => Json(json!({
            "_id": "user-1",
            "name": "Stub User",
            "email": "stub@example.com",
            "role": "admin",
        }))
        .into_response(),
        Some(_) => error_body(StatusCode::UNAUTHORIZED, "Invalid bearer token"),
        None => error_body(StatusCode::UNAUTHORIZED, "Authorization header required"),
    }
}

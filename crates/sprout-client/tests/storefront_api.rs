//! HTTP binding tests: client -> loopback stub -> client.

use sprout_catalog::{CatalogBrowser, Filters, Sort};
use sprout_client::StorefrontClient;
use sprout_client::auth::Credentials;
use sprout_client::banners::BannerFilters;
use sprout_core::Error;
use sprout_core::id::ProductId;
use sprout_test_utils::{StubStorefront, STUB_PASSWORD, STUB_TOKEN, init_test_logging};

fn client_for(stub: &sprout_test_utils::RunningStub) -> StorefrontClient {
    StorefrontClient::builder(stub.api_url())
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn listing_returns_envelope_and_omits_default_filters() {
    init_test_logging();
    let stub = StubStorefront::with_catalog(30).spawn().await;
    let client = client_for(&stub);

    let page = client.list_products(&Filters::default(), 1, 12).await.unwrap();
    assert_eq!(page.len(), 12);
    assert_eq!(page.total, Some(30));
    assert_eq!(page.total_pages, Some(3));
    assert!(page.is_full(12));

    let queries = stub.captured_queries();
    let query = queries.last().unwrap();
    // Default sentinels never reach the wire.
    assert!(!query.contains_key("category"));
    assert!(!query.contains_key("ageGroup"));
    assert!(!query.contains_key("gender"));
    assert!(!query.contains_key("sortBy"));
    // Price window and paging always do.
    assert_eq!(query.get("minPrice").map(String::as_str), Some("0"));
    assert_eq!(query.get("maxPrice").map(String::as_str), Some("5000"));
    assert_eq!(query.get("skip").map(String::as_str), Some("0"));
    assert_eq!(query.get("take").map(String::as_str), Some("12"));
}

#[tokio::test]
async fn listing_sends_non_default_filters() {
    let stub = StubStorefront::with_catalog(30).spawn().await;
    let client = client_for(&stub);

    let filters = Filters {
        category: "Traditional".into(),
        sort: Sort::Rating,
        ..Filters::default()
    }
    .with_search("set");

    let page = client.list_products(&filters, 2, 5).await.unwrap();
    assert!(page.data.iter().all(|p| p.category == "Traditional"));

    let queries = stub.captured_queries();
    let query = queries.last().unwrap();
    assert_eq!(query.get("category").map(String::as_str), Some("Traditional"));
    assert_eq!(query.get("search").map(String::as_str), Some("set"));
    assert_eq!(query.get("sortBy").map(String::as_str), Some("rating"));
    assert_eq!(query.get("sortOrder").map(String::as_str), Some("desc"));
    assert_eq!(query.get("skip").map(String::as_str), Some("5"));
}

#[tokio::test]
async fn product_detail_and_count() {
    let stub = StubStorefront::with_catalog(8).spawn().await;
    let client = client_for(&stub);

    let detail = client.product(&ProductId::from("prod-003")).await.unwrap();
    assert_eq!(detail.summary.id.as_str(), "prod-003");
    assert!(!detail.sizes.is_empty());

    assert_eq!(client.product_count().await.unwrap(), 8);
}

#[tokio::test]
async fn missing_product_maps_backend_message() {
    let stub = StubStorefront::with_catalog(2).spawn().await;
    let client = client_for(&stub);

    let err = client.product(&ProductId::from("prod-999")).await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn banners_unwrap_the_data_envelope() {
    // The stub serves four hero banners, two of them active.
    let stub = StubStorefront::with_catalog(1).spawn().await;
    let client = client_for(&stub);

    let all = client.banners(&BannerFilters::default()).await.unwrap();
    assert_eq!(all.len(), 4);

    let live = client.active_banners(&BannerFilters::default()).await.unwrap();
    assert_eq!(live.len(), 2);
    assert!(live.iter().all(|b| b.is_active));

    let filtered = client
        .banners(&BannerFilters {
            active: Some(false),
            ..BannerFilters::default()
        })
        .await
        .unwrap();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|b| !b.is_active));
}

#[tokio::test]
async fn cart_round_trip() {
    let stub = StubStorefront::with_catalog(5).spawn().await;
    let client = client_for(&stub);

    let cart = client.add_to_cart(&ProductId::from("prod-001"), 2).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.count(), 2);

    let cart = client.cart().await.unwrap();
    assert_eq!(cart.items[0].product_id.as_str(), "prod-001");

    client.clear_cart().await.unwrap();
    assert!(client.cart().await.unwrap().items.is_empty());
}

#[tokio::test]
async fn login_captures_token_and_authorizes_me() {
    let stub = StubStorefront::with_catalog(1).spawn().await;
    let client = client_for(&stub);

    // Unauthenticated: the backend's message comes through.
    let err = client.current_user().await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    let response = client
        .login(&Credentials {
            email: "asha@example.com".into(),
            password: STUB_PASSWORD.into(),
        })
        .await
        .unwrap();
    assert_eq!(response.token.as_deref(), Some(STUB_TOKEN));
    assert!(client.is_authenticated());

    let user = client.current_user().await.unwrap();
    assert!(user.is_admin());

    client.logout();
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn rejected_login_does_not_store_a_token() {
    let stub = StubStorefront::with_catalog(1).spawn().await;
    let client = client_for(&stub);

    let err = client
        .login(&Credentials {
            email: "asha@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn connection_refused_surfaces_transport_error() {
    // Nothing listens on this port.
    let client = StorefrontClient::builder("http://127.0.0.1:9/api")
        .build()
        .unwrap();
    let err = client.list_products(&Filters::default(), 1, 12).await.unwrap_err();
    assert!(matches!(err, Error::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn browser_pages_through_the_stub_backend() {
    // The controller running over the real HTTP source.
    let stub = StubStorefront::with_catalog(30).spawn().await;
    let client = client_for(&stub);

    let browser = CatalogBrowser::new(client, 12);
    browser.set_filters(Filters::default()).await;
    while browser.load_more().await {}

    let snap = browser.snapshot();
    assert_eq!(snap.items.len(), 30);
    assert!(!snap.page.has_more);
}

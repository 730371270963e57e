//! Pre-built fixture data for common test scenarios.

use sprout_core::banner::{Banner, BannerKind, BannerPosition};
use sprout_core::id::{BannerId, ProductId};
use sprout_core::product::{Product, ProductSummary};

/// Creates a fixture product. Every third product is `Traditional`, the
/// rest are `Casual`; prices step by ten rupees so price-window filters
/// have something to bite on.
pub fn product(i: usize) -> ProductSummary {
    let category = if i % 3 == 0 { "Traditional" } else { "Casual" };
    ProductSummary {
        id: ProductId::from(format!("prod-{i:03}")),
        name: format!("{category} Set {i}"),
        price: 199.0 + (i as f64) * 10.0,
        original_price: (i % 4 == 0).then(|| 299.0 + (i as f64) * 10.0),
        image: format!("https://img.example/prod-{i:03}.jpg"),
        category: category.to_string(),
        age_group: if i % 2 == 0 { "2-4 years" } else { "4-6 years" }.to_string(),
        gender: "Unisex".to_string(),
        description: format!("Fixture product number {i}"),
        rating: 3.5 + f64::from(u32::try_from(i % 3).unwrap()) * 0.5,
        review_count: u32::try_from(i).unwrap(),
        stock: 7,
    }
}

/// Creates `n` fixture products.
pub fn catalog(n: usize) -> Vec<ProductSummary> {
    (0..n).map(product).collect()
}

/// Creates a fixture hero banner. Odd-numbered banners are switched off.
pub fn banner(i: usize) -> Banner {
    Banner {
        id: BannerId::from(format!("banner-{i:02}")),
        title: format!("Festive Sale {i}"),
        subtitle: Some("Up to 40% off".to_string()),
        description: None,
        image_url: format!("https://img.example/banner-{i:02}.jpg"),
        mobile_image_url: None,
        link_url: Some("/products".to_string()),
        button_text: Some("Shop now".to_string()),
        kind: BannerKind::Hero,
        position: BannerPosition::Top,
        start_date: None,
        end_date: None,
        is_active: i % 2 == 0,
        priority: i32::try_from(i).unwrap(),
        tags: vec!["sale".to_string()],
        created_at: None,
        updated_at: None,
    }
}

/// Creates `n` fixture banners.
pub fn banners(n: usize) -> Vec<Banner> {
    (0..n).map(banner).collect()
}

/// Wraps a summary into a full detail record.
pub fn detail(summary: ProductSummary) -> Product {
    Product {
        images: vec![summary.image.clone()],
        sizes: vec!["2-3y".into(), "3-4y".into()],
        colors: vec!["Red".into(), "Blue".into()],
        features: vec!["100% cotton".into()],
        summary,
    }
}

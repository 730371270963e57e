//! Browse command - page through the catalog.

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use sprout_catalog::{CatalogBrowser, Filters, PriceRange, Sort, DEFAULT_PRICE_CEILING};
use sprout_core::product::ProductSummary;

use crate::{Config, OutputFormat};

/// Sort order flag.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum SortArg {
    /// Backend's curated default ordering.
    #[default]
    Featured,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Best rated first.
    Rating,
    /// Most recently added first.
    Newest,
}

impl From<SortArg> for Sort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Featured => Self::Featured,
            SortArg::PriceLow => Self::PriceLow,
            SortArg::PriceHigh => Self::PriceHigh,
            SortArg::Rating => Self::Rating,
            SortArg::Newest => Self::Newest,
        }
    }
}

/// Arguments for the browse command.
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Category to filter by.
    #[arg(long, default_value = "All")]
    pub category: String,

    /// Age group to filter by.
    #[arg(long, default_value = "All")]
    pub age_group: String,

    /// Gender to filter by.
    #[arg(long, default_value = "All")]
    pub gender: String,

    /// Minimum price in rupees.
    #[arg(long, default_value_t = 0)]
    pub min_price: u32,

    /// Maximum price in rupees.
    #[arg(long, default_value_t = DEFAULT_PRICE_CEILING)]
    pub max_price: u32,

    /// Sort order.
    #[arg(long, value_enum, default_value_t = SortArg::Featured)]
    pub sort: SortArg,

    /// Free-text search.
    #[arg(long)]
    pub search: Option<String>,

    /// Page to show (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Items per page.
    #[arg(long, default_value_t = 12)]
    pub page_size: u32,

    /// Keep loading pages until the catalog is exhausted.
    #[arg(long)]
    pub all: bool,
}

impl BrowseArgs {
    fn filters(&self) -> Filters {
        let mut filters = Filters {
            category: self.category.clone(),
            age_group: self.age_group.clone(),
            gender: self.gender.clone(),
            price_range: PriceRange {
                min: self.min_price,
                max: self.max_price,
            },
            sort: self.sort.into(),
            search: None,
        };
        if let Some(search) = &self.search {
            filters = filters.with_search(search.clone());
        }
        filters
    }
}

/// Execute the browse command.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the fetch fails.
pub async fn execute(args: BrowseArgs, config: &Config) -> Result<()> {
    let client = config.client()?;
    let browser = CatalogBrowser::new(client, args.page_size);

    browser.set_filters(args.filters()).await;
    if args.page > 1 {
        browser.load_page(args.page).await;
    }
    if args.all {
        while browser.load_more().await {}
    }

    let snap = browser.snapshot();
    if let Some(error) = snap.error {
        anyhow::bail!(error);
    }

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&snap.items)?);
        }
        OutputFormat::Text => {
            if snap.items.is_empty() {
                println!("No products found - try again with fewer filters");
                return Ok(());
            }

            match snap.page.total {
                Some(total) => {
                    println!("Showing {} of {total} products", snap.items.len());
                }
                None => println!("Showing {} products", snap.items.len()),
            }
            println!();
            for product in &snap.items {
                print_product_line(product);
            }
            if snap.page.has_more {
                println!();
                println!(
                    "More available: rerun with --page {} or --all",
                    snap.page.page + 1
                );
            }
        }
    }

    Ok(())
}

fn print_product_line(product: &ProductSummary) {
    let price = if product.on_sale() {
        format!(
            "₹{:.0} {}",
            product.price,
            format!("(was ₹{:.0})", product.original_price.unwrap_or_default()).dimmed()
        )
    } else {
        format!("₹{:.0}", product.price)
    };

    let stock = if product.in_stock() {
        format!("{} in stock", product.stock).green().to_string()
    } else {
        "out of stock".red().to_string()
    };

    println!(
        "  {:<12} {} - {} · {} · {} [{}]",
        product.id.as_str().dimmed(),
        product.name.bold(),
        price,
        product.category,
        product.age_group,
        stock,
    );
}

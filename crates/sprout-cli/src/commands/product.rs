//! Product command - show one product in detail.

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use sprout_core::id::ProductId;

use crate::{Config, OutputFormat};

/// Arguments for the product command.
#[derive(Debug, Args)]
pub struct ProductArgs {
    /// Product id to show.
    pub id: String,
}

/// Execute the product command.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the request fails,
/// or the product does not exist.
pub async fn execute(args: &ProductArgs, config: &Config) -> Result<()> {
    let client = config.client()?;
    let product = client.product(&ProductId::from(args.id.as_str())).await?;

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
        OutputFormat::Text => {
            let s = &product.summary;
            println!("{}", s.name.bold());
            println!("  {} · {} · {}", s.category, s.age_group, s.gender);
            if s.on_sale() {
                println!(
                    "  ₹{:.0} {}",
                    s.price,
                    format!("(was ₹{:.0})", s.original_price.unwrap_or_default()).dimmed()
                );
            } else {
                println!("  ₹{:.0}", s.price);
            }
            println!("  {:.1}★ from {} reviews", s.rating, s.review_count);
            if s.in_stock() {
                println!("  {}", format!("{} in stock", s.stock).green());
            } else {
                println!("  {}", "out of stock".red());
            }
            if !s.description.is_empty() {
                println!();
                println!("  {}", s.description);
            }
            if !product.sizes.is_empty() {
                println!();
                println!("  Sizes:  {}", product.sizes.join(", "));
            }
            if !product.colors.is_empty() {
                println!("  Colors: {}", product.colors.join(", "));
            }
            for feature in &product.features {
                println!("  - {feature}");
            }
        }
    }

    Ok(())
}

//! Cart commands - show and edit the cart.

use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use sprout_core::cart::{Cart, CartCounter};
use sprout_core::id::ProductId;

use crate::{Config, OutputFormat};

/// Cart subcommands.
#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product to the cart.
    Add {
        /// Product id to add.
        product_id: String,
        /// Quantity to add.
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product id to remove.
        product_id: String,
    },
    /// Empty the cart.
    Clear,
}

/// Execute a cart subcommand.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the request fails.
pub async fn execute(command: CartCommand, config: &Config) -> Result<()> {
    let client = config.client()?;
    let badge = CartCounter::new();

    let cart = match command {
        CartCommand::Show => client.cart().await?,
        CartCommand::Add {
            product_id,
            quantity,
        } => {
            client
                .add_to_cart(&ProductId::from(product_id.as_str()), quantity)
                .await?
        }
        CartCommand::Remove { product_id } => {
            client
                .remove_from_cart(&ProductId::from(product_id.as_str()))
                .await?
        }
        CartCommand::Clear => {
            client.clear_cart().await?;
            badge.clear();
            println!("Cart cleared");
            return Ok(());
        }
    };
    badge.set_count(cart.count());

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cart)?);
        }
        OutputFormat::Text => print_cart(&cart, &badge),
    }

    Ok(())
}

fn print_cart(cart: &Cart, badge: &CartCounter) {
    if cart.items.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for item in &cart.items {
        let mut variant = String::new();
        if let Some(size) = &item.selected_size {
            variant.push_str(&format!(" size {size}"));
        }
        if let Some(color) = &item.selected_color {
            variant.push_str(&format!(" {color}"));
        }
        println!(
            "  {:<12} {} x{}{} - ₹{:.0}",
            item.product_id.as_str().dimmed(),
            item.name.bold(),
            item.quantity,
            variant,
            item.price * f64::from(item.quantity),
        );
    }
    println!();
    println!(
        "  {} items, total {}",
        badge.count(),
        format!("₹{:.0}", cart.total()).bold()
    );
}

//! Orders commands - history, detail, and cancellation.

use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use sprout_core::id::OrderId;
use sprout_core::order::{Order, OrderStatus};

use crate::{Config, OutputFormat};

/// Orders subcommands.
#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List the authenticated shopper's orders.
    List,
    /// Show one order.
    Show {
        /// Order id to show.
        id: String,
    },
    /// Cancel an order that has not shipped yet.
    Cancel {
        /// Order id to cancel.
        id: String,
    },
}

/// Execute an orders subcommand.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the request fails.
pub async fn execute(command: OrdersCommand, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        OrdersCommand::List => {
            let orders = client.orders().await?;
            match config.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&orders)?);
                }
                OutputFormat::Text => {
                    if orders.is_empty() {
                        println!("No orders yet");
                        return Ok(());
                    }
                    for order in &orders {
                        print_order_line(order);
                    }
                }
            }
        }
        OrdersCommand::Show { id } => {
            let order = client.order(&OrderId::from(id.as_str())).await?;
            match config.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&order)?);
                }
                OutputFormat::Text => print_order_detail(&order),
            }
        }
        OrdersCommand::Cancel { id } => {
            let order = client.cancel_order(&OrderId::from(id.as_str())).await?;
            println!(
                "Order {} is now {}",
                order.id.as_str().bold(),
                format_status(order.status)
            );
        }
    }

    Ok(())
}

fn print_order_line(order: &Order) {
    let placed = order
        .created_at
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    println!(
        "  {:<26} {:<10} ₹{:<8.0} {} {}",
        order.id.as_str().dimmed(),
        format_status(order.status),
        order.total,
        format!("{} lines", order.items.len()),
        placed.dimmed(),
    );
}

fn print_order_detail(order: &Order) {
    println!("Order {}", order.id.as_str().bold());
    println!("  Status:  {}", format_status(order.status));
    println!("  Total:   ₹{:.0}", order.total);
    println!("  Payment: {}", order.payment_method);
    if let Some(placed) = order.created_at {
        println!("  Placed:  {}", placed.format("%Y-%m-%d %H:%M"));
    }
    println!();
    for item in &order.items {
        match item.price {
            Some(price) => println!(
                "  {} x{} - ₹{:.0}",
                item.product_id,
                item.quantity,
                price * f64::from(item.quantity)
            ),
            None => println!("  {} x{}", item.product_id, item.quantity),
        }
    }
    println!();
    let addr = &order.shipping_address;
    println!("  Ship to: {}", addr.name);
    println!("           {}", addr.line1);
    if let Some(line2) = &addr.line2 {
        println!("           {line2}");
    }
    println!("           {}, {} {}", addr.city, addr.state, addr.postal_code);
}

/// Colors a lifecycle state for terminal output.
fn format_status(status: OrderStatus) -> String {
    let name = status.as_str();
    match status {
        OrderStatus::Pending => name.yellow().to_string(),
        OrderStatus::Paid | OrderStatus::Shipped => name.cyan().to_string(),
        OrderStatus::Delivered => name.green().to_string(),
        OrderStatus::Cancelled => name.red().to_string(),
    }
}

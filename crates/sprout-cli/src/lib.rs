//! # sprout-cli
//!
//! Command-line storefront for the Sprout API.
//!
//! ## Commands
//!
//! - `sprout browse` - Page through the catalog with filters
//! - `sprout product` - Show one product in detail
//! - `sprout cart` - Show and edit the cart
//! - `sprout orders` - Order history and cancellation
//!
//! ## Configuration
//!
//! The CLI uses environment variables or command-line flags for settings:
//!
//! - `SPROUT_API_URL` - API endpoint (default: `http://localhost:5000/api`)
//! - `SPROUT_API_TOKEN` - Bearer token for authenticated endpoints

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
// CLI uses print! macros intentionally
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sprout_client::StorefrontClient;

/// Sprout CLI - terminal storefront.
#[derive(Debug, Parser)]
#[command(name = "sprout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API base URL.
    #[arg(
        long,
        env = "SPROUT_API_URL",
        default_value = "http://localhost:5000/api"
    )]
    pub api_url: String,

    /// Bearer token for authenticated endpoints.
    #[arg(long, env = "SPROUT_API_TOKEN")]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
            token: self.token.clone(),
            format: self.format.clone(),
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Page through the catalog with filters.
    Browse(commands::browse::BrowseArgs),
    /// Show one product in detail.
    Product(commands::product::ProductArgs),
    /// Show and edit the cart.
    #[command(subcommand)]
    Cart(commands::cart::CartCommand),
    /// Order history and cancellation.
    #[command(subcommand)]
    Orders(commands::orders::OrdersCommand),
}

/// Output format.
#[derive(Debug, Clone, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API base URL.
    pub api_url: String,
    /// Bearer token, if any.
    pub token: Option<String>,
    /// Output format.
    pub format: OutputFormat,
}

impl Config {
    /// Builds a storefront client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn client(&self) -> Result<StorefrontClient> {
        let mut builder = StorefrontClient::builder(self.api_url.clone());
        if let Some(token) = &self.token {
            builder = builder.bearer_token(token.clone());
        }
        Ok(builder.build()?)
    }
}

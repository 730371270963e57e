//! CLI subcommand implementations.

pub mod browse;
pub mod cart;
pub mod orders;
pub mod product;

//! CLI command implementations.

pub mod card;
pub mod check;
pub mod collections;
pub mod config;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only products in this collection.
    #[arg(short, long)]
    pub collection: Option<String>,

    /// Pet type tag (e.g. dog, cat, or "all").
    #[arg(short, long)]
    pub pet: Option<String>,

    /// Life stage tag (e.g. puppy, adult, senior, or "all").
    #[arg(short, long)]
    pub stage: Option<String>,
}

/// Arguments for the collections command.
#[derive(Args)]
pub struct CollectionsArgs {
    /// Show one collection and its products.
    pub id: Option<String>,
}

/// Arguments for the card command.
#[derive(Args)]
pub struct CardArgs {
    /// Product slug or ID.
    pub product: String,

    /// Option choice, repeatable.
    #[arg(short = 'S', long = "select", value_name = "NAME=VALUE")]
    pub select: Vec<String>,

    /// Add the resolved item to a cart and print the cart.
    #[arg(long)]
    pub add: bool,
}

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Catalog snapshot path to record.
        #[arg(long, default_value = "catalog.json")]
        catalog: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

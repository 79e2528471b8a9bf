//! Petwell CLI - inspect a storefront catalog snapshot from the terminal.
//!
//! Commands:
//! - `petwell products` - List products, optionally filtered
//! - `petwell collections` - List collections
//! - `petwell card` - Resolve a product card for a selection
//! - `petwell check` - Audit catalog data
//! - `petwell config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CardArgs, CheckArgs, CollectionsArgs, ConfigArgs, ProductsArgs};

/// Petwell CLI - Browse products and resolve product cards
#[derive(Parser)]
#[command(name = "petwell")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog snapshot path (overrides the config file)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products for a collection and pet filters
    Products(ProductsArgs),

    /// List collections
    Collections(CollectionsArgs),

    /// Resolve a product card for an option selection
    Card(CardArgs),

    /// Audit the catalog for data problems
    Check(CheckArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.catalog, output)?;
    logging::init(&ctx.config.log, cli.verbose);
    if let Some(path) = &ctx.config_path {
        ctx.output.debug(&format!("Using config {}", path.display()));
    }

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Collections(args) => commands::collections::run(args, &ctx),
        Commands::Card(args) => commands::card::run(args, &ctx),
        Commands::Check(args) => commands::check::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { catalog, force } => init_config(&catalog, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.info(&format!(
            "No config file found; using defaults. Looked for {}.",
            CONFIG_NAMES.join(", ")
        )),
    }

    ctx.output.info("[catalog]");
    match ctx.catalog_path() {
        Ok(path) => ctx.output.kv("path", &path.display().to_string()),
        Err(_) => ctx.output.kv("path", "(not set)"),
    }

    ctx.output.info("[storefront]");
    ctx.output.kv("currency", &ctx.config.storefront.currency);

    ctx.output.info("[log]");
    ctx.output.kv("level", &ctx.config.log.level);
    ctx.output.kv("format", &format!("{:?}", ctx.config.log.format).to_lowercase());

    Ok(())
}

fn init_config(catalog: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(catalog))?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    if !ctx.resolve_path(catalog).exists() {
        ctx.output
            .warn(&format!("Catalog snapshot {} does not exist yet", catalog));
    }

    Ok(())
}

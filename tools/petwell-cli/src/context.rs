//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context as _, Result};
use petwell_commerce::catalog::Catalog;
use petwell_commerce::Currency;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["petwell.toml", ".petwell.toml", "petwell.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    /// Catalog path given on the command line.
    pub catalog_override: Option<String>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<String>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd, &output) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            catalog_override,
            output,
            cwd,
        })
    }

    /// Resolve the catalog snapshot path.
    ///
    /// `--catalog` is relative to the working directory; `[catalog] path` is
    /// relative to the config file.
    pub fn catalog_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.catalog_override {
            return Ok(self.resolve_path(path));
        }
        let Some(path) = &self.config.catalog.path else {
            bail!("No catalog configured. Pass --catalog or set [catalog] path in petwell.toml.");
        };
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| self.resolve_path(&dir.to_string_lossy()))
            .unwrap_or_else(|| self.cwd.clone());
        Ok(base.join(path))
    }

    /// Read and parse the catalog snapshot.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let path = self.catalog_path()?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Catalog::from_json(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "catalog loaded");
        Ok(catalog)
    }

    /// Cart currency from `[storefront] currency`.
    pub fn currency(&self) -> Result<Currency> {
        let code = &self.config.storefront.currency;
        Currency::from_code(code).ok_or_else(|| anyhow!("Unknown storefront currency: {}", code))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path, output: &Output) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                match CliConfig::load(config_path.to_str()?) {
                    Ok(config) => return Some((config, config_path)),
                    Err(e) => output.warn(&format!("Skipping config: {:#}", e)),
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

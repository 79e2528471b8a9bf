//! Catalog audit command.

use anyhow::{bail, Result};
use petwell_commerce::catalog::CatalogIssue;
use serde::Serialize;

use super::CheckArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CheckReport<'a> {
    products: usize,
    collections: usize,
    errors: Vec<&'a CatalogIssue>,
    warnings: Vec<&'a CatalogIssue>,
}

/// Issues that hide something from shoppers or break lookups.
fn is_error(issue: &CatalogIssue) -> bool {
    issue.disables_variant()
        || matches!(
            issue,
            CatalogIssue::DuplicateSlug { .. } | CatalogIssue::NegativePrice { .. }
        )
}

/// Run the check command.
pub fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let issues = catalog.audit();
    let (errors, warnings): (Vec<&CatalogIssue>, Vec<&CatalogIssue>) =
        issues.iter().partition(|issue| is_error(issue));

    if ctx.output.is_json() {
        ctx.output.json(&CheckReport {
            products: catalog.products.len(),
            collections: catalog.collections.len(),
            errors: errors.clone(),
            warnings: warnings.clone(),
        });
    } else {
        ctx.output.header("Checking catalog");
        ctx.output.kv("products", &catalog.products.len().to_string());
        ctx.output.kv("collections", &catalog.collections.len().to_string());

        for error in &errors {
            ctx.output.error(&format!("Error: {}", error));
        }
        for warning in &warnings {
            ctx.output.warn(&format!("Warning: {}", warning));
        }
    }

    if !errors.is_empty() {
        bail!("Catalog has {} error(s)", errors.len());
    }
    if args.strict && !warnings.is_empty() {
        bail!("Catalog has {} warning(s)", warnings.len());
    }

    if warnings.is_empty() {
        ctx.output.success("Catalog is valid");
    } else {
        ctx.output.success("Catalog is valid (with warnings)");
    }
    Ok(())
}

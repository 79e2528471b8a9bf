//! Collection listing command.

use anyhow::Result;
use petwell_commerce::catalog::Collection;
use serde::Serialize;

use super::CollectionsArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CollectionRow<'a> {
    id: &'a str,
    name: &'a str,
    featured: bool,
    products: usize,
}

impl<'a> From<&'a Collection> for CollectionRow<'a> {
    fn from(collection: &'a Collection) -> Self {
        Self {
            id: collection.id.as_str(),
            name: &collection.name,
            featured: collection.featured,
            products: collection.len(),
        }
    }
}

/// Run the collections command.
pub fn run(args: CollectionsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    if let Some(id) = args.id {
        let collection = catalog.find_collection(&id)?;
        if ctx.output.is_json() {
            ctx.output.json(collection);
            return Ok(());
        }

        ctx.output.header(&collection.name);
        if let Some(description) = &collection.description {
            ctx.output.kv("description", description);
        }
        ctx.output.kv("featured", &collection.featured.to_string());
        for product_id in &collection.product_ids {
            match catalog.product(product_id) {
                Some(product) => ctx.output.list_item(&product.title),
                None => ctx
                    .output
                    .warn(&format!("{} references missing product {}", id, product_id)),
            }
        }
        return Ok(());
    }

    let rows: Vec<CollectionRow> = catalog.collections.iter().map(CollectionRow::from).collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Collections");
    if rows.is_empty() {
        ctx.output.info("No collections in this catalog.");
        return Ok(());
    }

    let widths = [16, 28, 8, 8];
    ctx.output
        .table_row(&["ID", "NAME", "FEATURED", "PRODUCTS"], &widths);
    for row in &rows {
        let featured = if row.featured { "yes" } else { "" };
        let count = row.products.to_string();
        ctx.output
            .table_row(&[row.id, row.name, featured, count.as_str()], &widths);
    }

    Ok(())
}

//! Catalog listing command.

use anyhow::Result;
use petwell_commerce::search::{CatalogListing, CatalogQuery, Facet};
use serde::Serialize;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{badges, stock_status};

#[derive(Serialize)]
struct ListingReport<'a> {
    heading: &'a str,
    filter_label: Option<&'a str>,
    empty_message: Option<&'static str>,
    products: Vec<ProductRow>,
}

#[derive(Serialize)]
struct ProductRow {
    id: String,
    slug: String,
    title: String,
    price: String,
    compare_at: Option<String>,
    discount_percentage: Option<u32>,
    in_stock: bool,
    has_variants: bool,
}

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let mut query = CatalogQuery::new();
    if let Some(collection) = args.collection {
        if catalog.find_collection(&collection).is_err() {
            ctx.output.warn(&format!("Unknown collection '{}'", collection));
        }
        query = query.with_collection(collection);
    }
    if let Some(pet) = args.pet {
        query = query.with_pet_type(Facet::parse(pet));
    }
    if let Some(stage) = args.stage {
        query = query.with_life_stage(Facet::parse(stage));
    }

    let listing = CatalogListing::build(Some(&catalog), &query);
    let cards = listing.cards();

    if ctx.output.is_json() {
        let report = ListingReport {
            heading: &listing.heading,
            filter_label: listing.filter_label.as_deref(),
            empty_message: listing.empty_message(),
            products: cards
                .iter()
                .map(|card| ProductRow {
                    id: card.product_id.to_string(),
                    slug: card.slug.clone(),
                    title: card.title.clone(),
                    price: card.price_display.clone(),
                    compare_at: card.compare_at_display.clone(),
                    discount_percentage: card.discount_percentage,
                    in_stock: card.in_stock,
                    has_variants: card.has_variants,
                })
                .collect(),
        };
        ctx.output.json(&report);
        return Ok(());
    }

    let heading = match &listing.filter_label {
        Some(label) => format!("{} ({})", listing.heading, label),
        None => listing.heading.clone(),
    };
    ctx.output.header(&heading);

    if let Some(message) = listing.empty_message() {
        ctx.output.info(message);
        return Ok(());
    }

    let widths = [28, 10, 10];
    ctx.output.table_row(&["TITLE", "PRICE", "WAS"], &widths);
    for card in &cards {
        // Variant products show the lowest price until a size is picked.
        let price = if card.has_variants && card.matching_variant.is_none() {
            format!("from {}", card.price_display)
        } else {
            card.price_display.clone()
        };
        let was = card.compare_at_display.as_deref().unwrap_or("-");
        ctx.output
            .table_row(&[card.title.as_str(), price.as_str(), was], &widths);
        ctx.output.kv("stock", &stock_status(card.in_stock));
        let card_badges = card.badges();
        if !card_badges.is_empty() {
            ctx.output.kv("badges", &badges(&card_badges));
        }
    }

    if listing.show_view_all {
        ctx.output.info("Drop --collection to view all products.");
    }

    Ok(())
}

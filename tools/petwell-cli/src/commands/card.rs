//! Product card command.

use anyhow::{anyhow, bail, Result};
use console::style;
use petwell_commerce::card::{OptionValueView, ProductCard, ProductCardView};
use petwell_commerce::cart::Cart;
use serde::Serialize;

use super::CardArgs;
use crate::context::Context;
use crate::output::{badges, stock_status};

#[derive(Serialize)]
struct CardReport<'a> {
    card: &'a ProductCardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    cart: Option<&'a Cart>,
}

/// Run the card command.
pub fn run(args: CardArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let product = catalog.find_product(&args.product)?;

    let mut card = ProductCard::new(product);
    for choice in &args.select {
        let (option, value) = parse_choice(choice)?;
        if !card.handle_option_change(option, value) {
            ctx.output.warn(&format!(
                "{} has no option value {}={}, ignoring",
                product.title, option, value
            ));
        }
    }

    let cart = if args.add {
        let mut cart = Cart::new(ctx.currency()?);
        if !card.handle_add_to_cart(&mut cart)? {
            bail!(
                "{} cannot be added to the cart ({})",
                product.title,
                card.state().as_str()
            );
        }
        Some(cart)
    } else {
        None
    };

    let view = card.view();
    if ctx.output.is_json() {
        ctx.output.json(&CardReport {
            card: &view,
            cart: cart.as_ref(),
        });
        return Ok(());
    }

    print_card(&view, ctx);
    if let Some(cart) = &cart {
        print_cart(cart, ctx)?;
    }
    Ok(())
}

/// Split a `Name=Value` choice.
fn parse_choice(choice: &str) -> Result<(&str, &str)> {
    let (option, value) = choice
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected NAME=VALUE, got '{}'", choice))?;
    let (option, value) = (option.trim(), value.trim());
    if option.is_empty() || value.is_empty() {
        bail!("Expected NAME=VALUE, got '{}'", choice);
    }
    Ok((option, value))
}

fn print_card(view: &ProductCardView, ctx: &Context) {
    ctx.output.header(&view.title);
    if let Some(excerpt) = &view.excerpt {
        ctx.output.kv("about", excerpt);
    }
    ctx.output.kv("selection", view.state.as_str());
    if let Some(variant) = &view.matching_variant {
        let title = view.variant_title.as_deref().unwrap_or("Default");
        ctx.output.kv("variant", &format!("{} ({})", title, variant));
    }

    let price = match &view.compare_at_display {
        Some(was) => format!("{} {}", view.price_display, style(was).dim().strikethrough()),
        None => view.price_display.clone(),
    };
    ctx.output.kv("price", &price);
    ctx.output.kv("stock", &stock_status(view.in_stock));
    let card_badges = view.badges();
    if !card_badges.is_empty() {
        ctx.output.kv("badges", &badges(&card_badges));
    }

    for option in &view.options {
        let values: Vec<String> = option.values.iter().map(option_value).collect();
        ctx.output.kv(&option.name, &values.join(" "));
    }

    let action = if view.can_add_to_cart {
        style(view.add_label()).green().bold().to_string()
    } else {
        style(view.add_label()).dim().to_string()
    };
    ctx.output.kv("action", &action);
}

fn option_value(value: &OptionValueView) -> String {
    let mut label = value.value.clone();
    if let Some(swatch) = &value.swatch {
        label = format!("{} {}", label, style(swatch).dim());
    }
    if value.selected {
        style(format!("[{}]", label)).bold().to_string()
    } else if !value.available {
        style(label).dim().strikethrough().to_string()
    } else {
        label
    }
}

fn print_cart(cart: &Cart, ctx: &Context) -> Result<()> {
    ctx.output.header("Cart");
    for item in &cart.items {
        let title = match &item.variant_title {
            Some(variant) => format!("{} - {}", item.title, variant),
            None => item.title.clone(),
        };
        ctx.output
            .list_item(&format!("{} x{} {}", title, item.quantity, item.total_price));
    }
    ctx.output.kv("items", &cart.item_count().to_string());
    ctx.output.kv("subtotal", &cart.subtotal()?.to_string());
    ctx.output.success("Added to cart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("Size=M").unwrap(), ("Size", "M"));
        assert_eq!(parse_choice(" Color = Red ").unwrap(), ("Color", "Red"));
        assert_eq!(parse_choice("Flavor=Beef=Liver").unwrap(), ("Flavor", "Beef=Liver"));
        assert!(parse_choice("Size").is_err());
        assert!(parse_choice("=M").is_err());
    }
}

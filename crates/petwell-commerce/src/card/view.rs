//! Render-ready product card view model.

use std::collections::BTreeMap;
use std::fmt;

use crate::card::{PriceSource, SelectionState};
use crate::ids::{OptionId, ProductId, VariantId};
use crate::money::Money;
use serde::Serialize;

/// Everything a presentation layer needs to draw one product card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductCardView {
    pub product_id: ProductId,
    pub title: String,
    pub slug: String,
    /// Description with markup stripped.
    pub excerpt: Option<String>,
    /// Matched variant image, else the first product image.
    pub image: Option<String>,
    pub featured: bool,
    pub has_variants: bool,
    pub options: Vec<OptionView>,
    pub selected: BTreeMap<String, String>,
    pub state: SelectionState,
    pub matching_variant: Option<VariantId>,
    pub variant_title: Option<String>,
    pub price_source: PriceSource,
    pub current_price: Money,
    pub current_compare_at: Option<Money>,
    pub discount_percentage: Option<u32>,
    pub price_display: String,
    pub compare_at_display: Option<String>,
    pub in_stock: bool,
    pub can_add_to_cart: bool,
}

impl ProductCardView {
    /// Badges in display order.
    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::new();
        if let Some(percent) = self.discount_percentage {
            badges.push(Badge::Discount(percent));
        }
        if self.featured {
            badges.push(Badge::Featured);
        }
        if !self.in_stock {
            badges.push(Badge::OutOfStock);
        }
        badges
    }

    /// Label for the add-to-cart button.
    pub fn add_label(&self) -> &'static str {
        if self.in_stock {
            "Add"
        } else {
            "Out of stock"
        }
    }
}

/// One option row on the card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OptionView {
    pub id: OptionId,
    pub name: String,
    /// Rendered as color swatches.
    pub is_color: bool,
    pub values: Vec<OptionValueView>,
}

impl OptionView {
    /// Values a shopper can still reach; the card only shows these.
    pub fn available_values(&self) -> impl Iterator<Item = &OptionValueView> {
        self.values.iter().filter(|v| v.available)
    }
}

/// One selectable value within an option row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OptionValueView {
    pub value: String,
    /// Some in-stock variant carries this value and agrees with the other choices.
    pub available: bool,
    pub selected: bool,
    /// Another value of the same option is selected.
    pub dimmed: bool,
    pub swatch: Option<String>,
}

/// Card badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Discount(u32),
    Featured,
    OutOfStock,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Discount(percent) => write!(f, "-{}%", percent),
            Badge::Featured => write!(f, "Featured"),
            Badge::OutOfStock => write!(f, "Out of stock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(Badge::Discount(20).to_string(), "-20%");
        assert_eq!(Badge::OutOfStock.to_string(), "Out of stock");
    }
}

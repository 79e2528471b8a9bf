//! Displayed price for a product card.

use crate::catalog::{effective_compare_at, ProductVariant, Stock};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Where the displayed price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// The variant matching the selection (or the single variant of a
    /// product without options).
    Matched,
    /// The cheapest usable variant, shown until the selection resolves.
    LowestPrice,
    /// The product's own base price.
    Base,
}

/// The variant (or product) a card is currently priced from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedTarget<'p> {
    /// Variant supplying the price, if any.
    pub variant: Option<&'p ProductVariant>,
    /// Why this target was chosen.
    pub source: PriceSource,
    /// Price.
    pub price: Money,
    /// Compare-at price, only when above the price.
    pub compare_at: Option<Money>,
    /// Stock of the target.
    pub stock: Stock,
}

impl<'p> PricedTarget<'p> {
    /// Price a card from a variant.
    pub fn from_variant(variant: &'p ProductVariant, source: PriceSource) -> Self {
        Self {
            variant: Some(variant),
            source,
            price: variant.price,
            compare_at: variant.effective_compare_at(),
            stock: variant.stock,
        }
    }

    /// Price a card from the product's base fields.
    pub fn base(price: Money, compare_at: Option<&Money>, stock: Stock) -> Self {
        Self {
            variant: None,
            source: PriceSource::Base,
            price,
            compare_at: effective_compare_at(&price, compare_at),
            stock,
        }
    }

    /// Discount badge value for this target.
    pub fn discount_percentage(&self) -> Option<u32> {
        self.compare_at
            .and_then(|cap| discount_percentage(&self.price, &cap))
    }
}

/// Whole-number discount, `round((compare_at - price) / compare_at * 100)`.
///
/// Only defined when `compare_at` is strictly above a non-negative `price`
/// in the same currency, so the result never exceeds 100. Rounds half up, so
/// 87.5% shows as 88%.
pub fn discount_percentage(price: &Money, compare_at: &Money) -> Option<u32> {
    if price.currency != compare_at.currency || compare_at.amount_cents <= price.amount_cents {
        return None;
    }
    if price.amount_cents < 0 {
        return None;
    }
    let savings = i128::from(compare_at.amount_cents) - i128::from(price.amount_cents);
    let compare = i128::from(compare_at.amount_cents);
    let percent = (savings * 200 + compare) / (compare * 2);
    u32::try_from(percent).ok()
}

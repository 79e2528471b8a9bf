//! Stock levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock on hand for a variant or a simple product.
///
/// Serialized as a non-negative count, or `null` when inventory is not
/// tracked and the item never sells out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum Stock {
    /// A tracked count.
    Limited(u32),
    /// Untracked inventory.
    #[default]
    Unlimited,
}

impl Stock {
    /// Check if at least one unit can be sold.
    pub fn is_available(&self) -> bool {
        match self {
            Stock::Limited(quantity) => *quantity > 0,
            Stock::Unlimited => true,
        }
    }

    /// Check if a specific quantity can be sold.
    pub fn can_fulfill(&self, quantity: u32) -> bool {
        match self {
            Stock::Limited(available) => *available >= quantity,
            Stock::Unlimited => true,
        }
    }

    /// Tracked count, if any.
    pub fn quantity(&self) -> Option<u32> {
        match self {
            Stock::Limited(quantity) => Some(*quantity),
            Stock::Unlimited => None,
        }
    }
}

impl From<Option<u32>> for Stock {
    fn from(value: Option<u32>) -> Self {
        value.map(Stock::Limited).unwrap_or(Stock::Unlimited)
    }
}

impl From<Stock> for Option<u32> {
    fn from(stock: Stock) -> Self {
        stock.quantity()
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stock::Limited(quantity) => write!(f, "{}", quantity),
            Stock::Unlimited => write!(f, "unlimited"),
        }
    }
}

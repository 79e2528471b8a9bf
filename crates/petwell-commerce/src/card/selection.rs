//! Per-card option selection.

use std::collections::BTreeMap;

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// The values a shopper has picked so far, keyed by option name.
///
/// A selection belongs to exactly one product card. It is never shared and
/// must be dropped when the card shows a different product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    values: BTreeMap<String, String>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial selection for a product: options with exactly one value are
    /// pre-selected, everything else is left open.
    pub fn seeded(product: &Product) -> Self {
        let values = product
            .options
            .iter()
            .filter_map(|o| match o.values.as_slice() {
                [only] => Some((o.name.clone(), only.clone())),
                _ => None,
            })
            .collect();
        Self { values }
    }

    /// Chosen value for an option.
    pub fn get(&self, option: &str) -> Option<&str> {
        self.values.get(option).map(String::as_str)
    }

    /// Choose a value, returning the one it replaced.
    pub fn set(&mut self, option: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(option.into(), value.into())
    }

    /// Clear the choice for an option.
    pub fn remove(&mut self, option: &str) -> Option<String> {
        self.values.remove(option)
    }

    /// Clear every choice.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterate over (option, value) pairs in option-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of chosen options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been chosen.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every declared option of `product` has a value.
    pub fn covers(&self, product: &Product) -> bool {
        product.options.iter().all(|o| self.values.contains_key(&o.name))
    }

    /// Where this selection sits in the card's selection lifecycle.
    pub fn state(&self, product: &Product) -> SelectionState {
        let chosen = product
            .options
            .iter()
            .filter(|o| self.values.contains_key(&o.name))
            .count();
        if chosen == product.options.len() {
            SelectionState::Resolved
        } else if chosen == 0 {
            SelectionState::Unselected
        } else {
            SelectionState::PartiallySelected
        }
    }

    /// The underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Selection lifecycle of a product card.
///
/// `Resolved` means every option has a value; whether a variant actually
/// exists for that combination is a separate question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    /// No option chosen yet.
    Unselected,
    /// Some, but not all, options chosen.
    PartiallySelected,
    /// Every option chosen (always the case for products without options).
    Resolved,
}

impl SelectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionState::Unselected => "unselected",
            SelectionState::PartiallySelected => "partially_selected",
            SelectionState::Resolved => "resolved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductOption;
    use crate::money::{Currency, Money};

    fn harness() -> Product {
        Product::new("p1", "Harness", "harness", Money::new(2500, Currency::USD))
            .with_option(ProductOption::new("Color", ["Sage"]))
            .with_option(ProductOption::new("Size", ["S", "M"]))
    }

    #[test]
    fn test_seeded_preselects_single_value_options() {
        let selection = Selection::seeded(&harness());
        assert_eq!(selection.get("Color"), Some("Sage"));
        assert_eq!(selection.get("Size"), None);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_state_transitions() {
        let product = harness();
        let mut selection = Selection::new();
        assert_eq!(selection.state(&product), SelectionState::Unselected);

        selection.set("Size", "S");
        assert_eq!(selection.state(&product), SelectionState::PartiallySelected);

        selection.set("Color", "Sage");
        assert_eq!(selection.state(&product), SelectionState::Resolved);
        assert!(selection.covers(&product));

        selection.remove("Size");
        assert_eq!(selection.state(&product), SelectionState::PartiallySelected);
    }

    #[test]
    fn test_product_without_options_is_resolved() {
        let product = Product::new("p2", "Chews", "chews", Money::new(900, Currency::USD));
        assert_eq!(Selection::new().state(&product), SelectionState::Resolved);
    }

    #[test]
    fn test_set_replaces_only_that_option() {
        let mut selection: Selection = [("Color", "Sage"), ("Size", "S")].into_iter().collect();
        assert_eq!(selection.set("Size", "M").as_deref(), Some("S"));
        assert_eq!(selection.get("Color"), Some("Sage"));
        assert_eq!(selection.get("Size"), Some("M"));
    }
}

//! Combination-key index over a product's variants.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::card::Selection;
use crate::catalog::{check_variant_key, Product, ProductVariant};

/// Maps option-value tuples (in option declaration order) to variants.
///
/// Built once per product. Variants with a malformed or duplicated key are
/// left out: they can never be matched and never make a value available.
/// An index is rebuilt on every render, so skipped variants only log at
/// debug level; `Catalog::from_json` warns about them once per load.
#[derive(Debug, Clone, Default)]
pub struct VariantIndex {
    by_key: HashMap<Vec<String>, usize>,
    active: Vec<usize>,
    inert: usize,
}

impl VariantIndex {
    /// Index a product's variants.
    pub fn build(product: &Product) -> Self {
        let mut index = Self::default();

        for option in &product.options {
            for (pos, value) in option.values.iter().enumerate() {
                if option.values[..pos].contains(value) {
                    tracing::debug!(
                        product = %product.id,
                        option = %option.name,
                        value = %value,
                        "duplicate option value"
                    );
                }
            }
        }

        for (pos, variant) in product.variants.iter().enumerate() {
            if let Some(issue) = check_variant_key(product, variant) {
                tracing::debug!(product = %product.id, variant = %variant.id, %issue, "variant is inert");
                index.inert += 1;
                continue;
            }

            match index.by_key.entry(key_of(product, variant)) {
                Entry::Occupied(existing) => {
                    tracing::debug!(
                        product = %product.id,
                        variant = %variant.id,
                        first = %product.variants[*existing.get()].id,
                        "duplicate combination key, variant is inert"
                    );
                    index.inert += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(pos);
                    index.active.push(pos);
                }
            }
        }

        index
    }

    /// Position of the variant whose key equals a complete selection.
    pub fn lookup(&self, product: &Product, selection: &Selection) -> Option<usize> {
        let key = product
            .options
            .iter()
            .map(|o| selection.get(&o.name).map(str::to_string))
            .collect::<Option<Vec<_>>>()?;
        self.by_key.get(&key).copied()
    }

    /// Positions of usable variants, in declaration order.
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Number of variants left out of the index.
    pub fn inert_count(&self) -> usize {
        self.inert
    }
}

fn key_of(product: &Product, variant: &ProductVariant) -> Vec<String> {
    product
        .options
        .iter()
        .filter_map(|o| variant.value_of(&o.name).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductOption, ProductVariant};
    use crate::money::{Currency, Money};

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn product() -> Product {
        Product::new("p1", "Bowl", "bowl", usd(1500))
            .with_option(ProductOption::new("Color", ["Red", "Blue"]))
            .with_option(ProductOption::new("Size", ["S", "M"]))
            .with_variant(
                ProductVariant::new("red-s", usd(1500))
                    .with_option("Color", "Red")
                    .with_option("Size", "S"),
            )
            .with_variant(
                ProductVariant::new("blue-m", usd(1700))
                    .with_option("Size", "M")
                    .with_option("Color", "Blue"),
            )
            .with_variant(
                ProductVariant::new("ghost", usd(100))
                    .with_option("Color", "Green")
                    .with_option("Size", "S"),
            )
            .with_variant(
                ProductVariant::new("red-s-again", usd(1400))
                    .with_option("Color", "Red")
                    .with_option("Size", "S"),
            )
    }

    #[test]
    fn test_lookup_complete_selection() {
        let product = product();
        let index = VariantIndex::build(&product);
        let selection: Selection = [("Size", "M"), ("Color", "Blue")].into_iter().collect();
        assert_eq!(index.lookup(&product, &selection), Some(1));
    }

    #[test]
    fn test_incomplete_selection_has_no_key() {
        let product = product();
        let index = VariantIndex::build(&product);
        let selection: Selection = [("Color", "Red")].into_iter().collect();
        assert_eq!(index.lookup(&product, &selection), None);
    }

    #[test]
    fn test_malformed_and_duplicate_variants_are_inert() {
        let product = product();
        let index = VariantIndex::build(&product);
        assert_eq!(index.active(), &[0, 1]);
        assert_eq!(index.inert_count(), 2);

        let selection: Selection = [("Color", "Red"), ("Size", "S")].into_iter().collect();
        assert_eq!(index.lookup(&product, &selection), Some(0));
    }
}

//! Variant resolution for a single product.
//!
//! Everything here is a pure function of the product snapshot and the
//! current [`Selection`]. Nothing is cached across selections; the only
//! precomputed state is the [`VariantIndex`], which depends on the product
//! alone.

use crate::card::{
    OptionValueView, OptionView, PriceSource, PricedTarget, ProductCardView, Selection,
    SelectionState, VariantIndex,
};
use crate::cart::AddToCart;
use crate::catalog::{Product, ProductVariant};
use crate::money::{format_money, Money};

/// Resolves selections against one product's options and variants.
#[derive(Debug, Clone)]
pub struct VariantResolver<'p> {
    product: &'p Product,
    index: VariantIndex,
}

impl<'p> VariantResolver<'p> {
    /// Index the product and bind a resolver to it.
    pub fn new(product: &'p Product) -> Self {
        Self {
            product,
            index: VariantIndex::build(product),
        }
    }

    /// The product being resolved.
    pub fn product(&self) -> &'p Product {
        self.product
    }

    /// True when the product declares at least one option, even one with a
    /// single value.
    pub fn has_variants(&self) -> bool {
        self.product.has_options()
    }

    fn active_variants(&self) -> impl Iterator<Item = &'p ProductVariant> + '_ {
        let product = self.product;
        self.index.active().iter().map(move |&pos| &product.variants[pos])
    }

    /// Selection entries that name a declared option.
    fn constraints<'s>(&'s self, selection: &'s Selection) -> impl Iterator<Item = (&'s str, &'s str)> + 's {
        let product: &'s Product = self.product;
        selection
            .iter()
            .filter(move |(name, _)| product.option(name).is_some())
    }

    fn agrees_with(&self, variant: &ProductVariant, selection: &Selection, skip: Option<&str>) -> bool {
        self.constraints(selection)
            .filter(|(name, _)| Some(*name) != skip)
            .all(|(name, chosen)| variant.value_of(name) == Some(chosen))
    }

    /// Whether `value` of `option` can still lead to an in-stock variant.
    ///
    /// The option's own current choice is ignored, so a shopper always sees
    /// what they could switch to. Every other chosen option constrains.
    pub fn is_option_value_available(&self, option: &str, value: &str, selection: &Selection) -> bool {
        let declared = self
            .product
            .option(option)
            .map(|o| o.has_value(value))
            .unwrap_or(false);
        if !declared {
            return false;
        }

        self.active_variants().any(|variant| {
            variant.value_of(option) == Some(value)
                && variant.is_in_stock()
                && self.agrees_with(variant, selection, Some(option))
        })
    }

    /// The variant whose combination key equals the selection.
    ///
    /// `None` while the selection is incomplete, or when the catalog has no
    /// variant for the chosen combination. For a product without options
    /// this is its option-less variant, if it has one.
    pub fn matching_variant(&self, selection: &Selection) -> Option<&'p ProductVariant> {
        self.index
            .lookup(self.product, selection)
            .map(|pos| &self.product.variants[pos])
    }

    /// What the card is priced from right now.
    ///
    /// A matched variant wins; otherwise the cheapest usable variant (first
    /// declared on ties) so a price shows before the selection is complete;
    /// otherwise the product's base price.
    pub fn priced_target(&self, selection: &Selection) -> PricedTarget<'p> {
        if let Some(variant) = self.matching_variant(selection) {
            return PricedTarget::from_variant(variant, PriceSource::Matched);
        }
        if self.has_variants() {
            if let Some(cheapest) = self.active_variants().min_by_key(|v| v.price.amount_cents) {
                return PricedTarget::from_variant(cheapest, PriceSource::LowestPrice);
            }
        }
        PricedTarget::base(
            self.product.price,
            self.product.compare_at_price.as_ref(),
            self.product.stock,
        )
    }

    pub fn current_price(&self, selection: &Selection) -> Money {
        self.priced_target(selection).price
    }

    pub fn current_compare_at(&self, selection: &Selection) -> Option<Money> {
        self.priced_target(selection).compare_at
    }

    pub fn discount_percentage(&self, selection: &Selection) -> Option<u32> {
        self.priced_target(selection).discount_percentage()
    }

    /// Stock status shown on the card.
    ///
    /// Once a variant is matched (or the product has no options) this is
    /// that target's stock. While the selection is open it reports whether
    /// any in-stock variant is still compatible with what has been chosen.
    pub fn in_stock(&self, selection: &Selection) -> bool {
        if let Some(variant) = self.matching_variant(selection) {
            return variant.is_in_stock();
        }
        if !self.has_variants() {
            return self.product.stock.is_available();
        }
        self.active_variants()
            .any(|v| v.is_in_stock() && self.agrees_with(v, selection, None))
    }

    /// Whether the add-to-cart action is enabled.
    pub fn can_add_to_cart(&self, selection: &Selection) -> bool {
        match self.matching_variant(selection) {
            Some(variant) => variant.is_in_stock(),
            None if !self.has_variants() => self.product.stock.is_available(),
            None => false,
        }
    }

    pub fn state(&self, selection: &Selection) -> SelectionState {
        selection.state(self.product)
    }

    /// The cart request for the current selection, or `None` when the
    /// selection is not purchasable.
    pub fn add_to_cart_request(&self, selection: &Selection) -> Option<AddToCart> {
        if !self.can_add_to_cart(selection) {
            return None;
        }
        let target = self.priced_target(selection);
        Some(AddToCart {
            product_id: self.product.id.clone(),
            variant_id: target.variant.map(|v| v.id.clone()),
            title: self.product.title.clone(),
            variant_title: target
                .variant
                .filter(|_| self.has_variants())
                .map(|v| self.product.variant_title(v)),
            unit_price: target.price,
            quantity: 1,
        })
    }

    /// Build the full card view model.
    pub fn view(&self, selection: &Selection) -> ProductCardView {
        let product = self.product;
        let matched = self.matching_variant(selection);
        let target = self.priced_target(selection);

        let options = product
            .options
            .iter()
            .map(|option| {
                let chosen = selection.get(&option.name);
                let mut values: Vec<OptionValueView> = Vec::with_capacity(option.values.len());
                for value in &option.values {
                    if values.iter().any(|v| &v.value == value) {
                        continue;
                    }
                    let selected = chosen == Some(value.as_str());
                    values.push(OptionValueView {
                        value: value.clone(),
                        available: self.is_option_value_available(&option.name, value, selection),
                        selected,
                        dimmed: chosen.is_some() && !selected,
                        swatch: option.swatch_for(value).map(str::to_string),
                    });
                }
                OptionView {
                    id: option.id.clone(),
                    name: option.name.clone(),
                    is_color: option.is_color(),
                    values,
                }
            })
            .collect();

        let image = matched
            .and_then(|v| v.image.clone())
            .or_else(|| product.primary_image().map(str::to_string));

        ProductCardView {
            product_id: product.id.clone(),
            title: product.title.clone(),
            slug: product.slug.clone(),
            excerpt: product.plain_description(),
            image,
            featured: product.featured,
            has_variants: self.has_variants(),
            options,
            selected: self.constraints(selection).map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            state: self.state(selection),
            matching_variant: matched.map(|v| v.id.clone()),
            variant_title: matched
                .filter(|_| self.has_variants())
                .map(|v| product.variant_title(v)),
            price_source: target.source,
            current_price: target.price,
            current_compare_at: target.compare_at,
            discount_percentage: target.discount_percentage(),
            price_display: format_money(&target.price),
            compare_at_display: target.compare_at.as_ref().map(format_money),
            in_stock: self.in_stock(selection),
            can_add_to_cart: self.can_add_to_cart(selection),
        }
    }
}

/// Resolve a product and selection into a card view.
///
/// This is the framework-agnostic entry point; [`crate::card::ProductCard`]
/// is a thin stateful wrapper around it.
pub fn resolve(product: &Product, selection: &Selection) -> ProductCardView {
    VariantResolver::new(product).view(selection)
}

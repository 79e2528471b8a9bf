//! Stateful product card binding.
//!
//! A [`ProductCard`] is what a UI layer holds per rendered card: a resolver
//! for the product plus the shopper's selection. Presentation code reads the
//! derived fields and forwards clicks to the handlers.

use crate::card::{PricedTarget, ProductCardView, Selection, SelectionState, VariantResolver};
use crate::cart::CartSink;
use crate::catalog::{Product, ProductVariant};
use crate::error::CommerceError;
use crate::money::Money;

/// One product card instance and its private selection.
#[derive(Debug, Clone)]
pub struct ProductCard<'p> {
    resolver: VariantResolver<'p>,
    selection: Selection,
}

impl<'p> ProductCard<'p> {
    /// Mount a card for `product` with a freshly seeded selection.
    pub fn new(product: &'p Product) -> Self {
        Self {
            resolver: VariantResolver::new(product),
            selection: Selection::seeded(product),
        }
    }

    /// Show a different product. The old selection is discarded.
    pub fn swap_product(&mut self, product: &'p Product) {
        *self = Self::new(product);
    }

    pub fn product(&self) -> &'p Product {
        self.resolver.product()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Choose `value` for `option`, replacing any earlier choice.
    ///
    /// Availability is not checked: picking a sold-out combination is
    /// allowed and simply leaves the card unresolved. Names or values the
    /// product does not declare are ignored and `false` is returned.
    pub fn handle_option_change(&mut self, option: &str, value: &str) -> bool {
        let declared = self
            .product()
            .option(option)
            .map(|o| o.has_value(value))
            .unwrap_or(false);
        if !declared {
            tracing::debug!(
                product = %self.product().id,
                option,
                value,
                "ignoring change to undeclared option value"
            );
            return false;
        }
        self.selection.set(option, value);
        true
    }

    /// Clear the choice for one option.
    pub fn clear_option(&mut self, option: &str) -> bool {
        self.selection.remove(option).is_some()
    }

    /// Back to the initial, seeded selection.
    pub fn reset(&mut self) {
        self.selection = Selection::seeded(self.product());
    }

    pub fn is_option_value_available(&self, option: &str, value: &str) -> bool {
        self.resolver
            .is_option_value_available(option, value, &self.selection)
    }

    pub fn matching_variant(&self) -> Option<&'p ProductVariant> {
        self.resolver.matching_variant(&self.selection)
    }

    pub fn priced_target(&self) -> PricedTarget<'p> {
        self.resolver.priced_target(&self.selection)
    }

    pub fn current_price(&self) -> Money {
        self.resolver.current_price(&self.selection)
    }

    pub fn current_compare_at(&self) -> Option<Money> {
        self.resolver.current_compare_at(&self.selection)
    }

    pub fn discount_percentage(&self) -> Option<u32> {
        self.resolver.discount_percentage(&self.selection)
    }

    pub fn in_stock(&self) -> bool {
        self.resolver.in_stock(&self.selection)
    }

    pub fn has_variants(&self) -> bool {
        self.resolver.has_variants()
    }

    pub fn can_add_to_cart(&self) -> bool {
        self.resolver.can_add_to_cart(&self.selection)
    }

    pub fn state(&self) -> SelectionState {
        self.resolver.state(&self.selection)
    }

    /// Current view model.
    pub fn view(&self) -> ProductCardView {
        self.resolver.view(&self.selection)
    }

    /// Send one unit of the resolved item to the cart.
    ///
    /// Returns `Ok(false)` without touching the cart when the card is not
    /// purchasable; errors come only from the cart itself.
    pub fn handle_add_to_cart<C>(&self, cart: &mut C) -> Result<bool, CommerceError>
    where
        C: CartSink + ?Sized,
    {
        let Some(request) = self.resolver.add_to_cart_request(&self.selection) else {
            tracing::debug!(
                product = %self.product().id,
                state = self.state().as_str(),
                "add to cart rejected"
            );
            return Ok(false);
        };
        cart.add(request)?;
        Ok(true)
    }
}

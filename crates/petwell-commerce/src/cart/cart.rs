//! In-memory cart.

use crate::cart::{AddToCart, CartSink};
use crate::error::CommerceError;
use crate::ids::{CartId, LineItemId, ProductId, VariantId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

fn check_quantity(quantity: i64) -> Result<i64, CommerceError> {
    if quantity <= 0 {
        Err(CommerceError::InvalidQuantity(quantity))
    } else if quantity > MAX_QUANTITY_PER_ITEM {
        Err(CommerceError::QuantityExceedsLimit(quantity, MAX_QUANTITY_PER_ITEM))
    } else {
        Ok(quantity)
    }
}

/// A single-currency cart. One line per product + variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub items: Vec<LineItem>,
    pub currency: Currency,
}

impl Cart {
    pub fn new(currency: Currency) -> Self {
        Self {
            id: CartId::generate(),
            items: Vec::new(),
            currency,
        }
    }

    fn line_mut(&mut self, product: &ProductId, variant: Option<&VariantId>) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|line| &line.product_id == product && line.variant_id.as_ref() == variant)
    }

    /// Add a card's request. Repeated adds of the same item bump the
    /// existing line instead of opening a new one.
    ///
    /// Nothing changes when the request is rejected.
    pub fn add_item(&mut self, request: AddToCart) -> Result<LineItemId, CommerceError> {
        check_quantity(request.quantity)?;
        if request.unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency,
                got: request.unit_price.currency,
            });
        }

        if let Some(line) = self.line_mut(&request.product_id, request.variant_id.as_ref()) {
            let merged = line
                .quantity
                .checked_add(request.quantity)
                .ok_or(CommerceError::Overflow)?;
            line.set_quantity(check_quantity(merged)?)?;
            return Ok(line.id.clone());
        }

        let line = LineItem::from_request(request)?;
        let id = line.id.clone();
        self.items.push(line);
        Ok(id)
    }

    /// Set a line's quantity; zero or less removes the line.
    ///
    /// Returns whether the line existed.
    pub fn update_quantity(&mut self, line_id: &LineItemId, quantity: i64) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(line_id));
        }
        let quantity = check_quantity(quantity)?;
        match self.items.iter_mut().find(|line| &line.id == line_id) {
            Some(line) => line.set_quantity(quantity).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn remove_item(&mut self, line_id: &LineItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| &line.id != line_id);
        self.items.len() != before
    }

    /// Units across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        Money::try_sum(self.items.iter().map(|line| &line.total_price), self.currency)
            .ok_or(CommerceError::Overflow)
    }
}

impl CartSink for Cart {
    fn add(&mut self, request: AddToCart) -> Result<(), CommerceError> {
        let line = self.add_item(request)?;
        tracing::debug!(cart = %self.id, line = %line, "item added");
        Ok(())
    }
}

/// One cart line. Title and variant title are copied from the card so the
/// cart renders without the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: LineItemId,
    pub product_id: ProductId,
    pub variant_id: Option<VariantId>,
    pub title: String,
    pub variant_title: Option<String>,
    pub quantity: i64,
    pub unit_price: Money,
    /// `unit_price * quantity`
    pub total_price: Money,
}

impl LineItem {
    fn from_request(request: AddToCart) -> Result<Self, CommerceError> {
        let mut line = Self {
            id: LineItemId::generate(),
            product_id: request.product_id,
            variant_id: request.variant_id,
            title: request.title,
            variant_title: request.variant_title,
            quantity: 0,
            unit_price: request.unit_price,
            total_price: Money::zero(request.unit_price.currency),
        };
        line.set_quantity(request.quantity)?;
        Ok(line)
    }

    /// Change the quantity and recompute the total. On overflow the line is
    /// left as it was.
    fn set_quantity(&mut self, quantity: i64) -> Result<(), CommerceError> {
        self.total_price = self
            .unit_price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        self.quantity = quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(variant: Option<&str>, quantity: i64, cents: i64) -> AddToCart {
        AddToCart {
            product_id: ProductId::new("kibble"),
            variant_id: variant.map(VariantId::from),
            title: "Grain-Free Kibble".to_string(),
            variant_title: variant.map(str::to_string),
            unit_price: Money::new(cents, Currency::USD),
            quantity,
        }
    }

    #[test]
    fn test_repeat_add_merges_line() {
        let mut cart = Cart::new(Currency::USD);
        let first = cart.add_item(request(Some("m"), 1, 1000)).unwrap();
        let second = cart.add_item(request(Some("m"), 2, 1000)).unwrap();

        assert_eq!(first, second);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal().unwrap(), Money::new(3000, Currency::USD));
    }

    #[test]
    fn test_variants_and_simple_products_get_own_lines() {
        let mut cart = Cart::new(Currency::USD);
        cart.add_item(request(Some("m"), 2, 1000)).unwrap();
        cart.add_item(request(Some("l"), 1, 1500)).unwrap();
        cart.add_item(request(None, 1, 900)).unwrap();
        assert_eq!(cart.items.len(), 3);
        assert_eq!(cart.subtotal().unwrap().display(), "$44.00");
    }

    #[test]
    fn test_update_and_remove() {
        let mut cart = Cart::new(Currency::USD);
        let line = cart.add_item(request(Some("m"), 1, 1000)).unwrap();

        assert!(cart.update_quantity(&line, 5).unwrap());
        assert_eq!(cart.items[0].total_price.amount_cents, 5000);

        assert!(cart.update_quantity(&line, 0).unwrap());
        assert!(cart.is_empty());
        assert!(!cart.update_quantity(&line, 2).unwrap());
    }

    #[test]
    fn test_quantity_limits() {
        let mut cart = Cart::new(Currency::USD);
        assert!(matches!(
            cart.add_item(request(Some("m"), 0, 1000)),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(matches!(
            cart.add_item(request(Some("m"), MAX_QUANTITY_PER_ITEM + 1, 1000)),
            Err(CommerceError::QuantityExceedsLimit(_, _))
        ));

        cart.add_item(request(Some("m"), MAX_QUANTITY_PER_ITEM, 1000)).unwrap();
        assert!(matches!(
            cart.add_item(request(Some("m"), 1, 1000)),
            Err(CommerceError::QuantityExceedsLimit(_, _))
        ));
        assert_eq!(cart.item_count(), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_overflow_leaves_line_untouched() {
        let mut cart = Cart::new(Currency::USD);
        let line = cart.add_item(request(Some("m"), 1, i64::MAX / 2)).unwrap();
        assert!(matches!(
            cart.update_quantity(&line, 3),
            Err(CommerceError::Overflow)
        ));
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::new(Currency::EUR);
        assert!(matches!(
            cart.add_item(request(Some("m"), 1, 1000)),
            Err(CommerceError::CurrencyMismatch {
                expected: Currency::EUR,
                got: Currency::USD
            })
        ));
        assert!(cart.is_empty());
    }
}

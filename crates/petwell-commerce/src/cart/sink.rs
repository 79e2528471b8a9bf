//! The add-to-cart seam.

use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One resolved item headed for the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddToCart {
    pub product_id: ProductId,
    /// Absent for products sold without a variant row.
    pub variant_id: Option<VariantId>,
    pub title: String,
    /// e.g. "Red / M"; absent for products without options.
    pub variant_title: Option<String>,
    pub unit_price: Money,
    pub quantity: i64,
}

/// Receives add-to-cart requests from product cards.
pub trait CartSink {
    fn add(&mut self, request: AddToCart) -> Result<(), CommerceError>;
}

/// Records requests as-is; handy for hosts that batch cart writes.
impl CartSink for Vec<AddToCart> {
    fn add(&mut self, request: AddToCart) -> Result<(), CommerceError> {
        self.push(request);
        Ok(())
    }
}

//! Commerce error types.

use thiserror::Error;

use crate::money::Currency;

/// Errors from catalog lookups and cart writes.
///
/// Catalog data problems (dangling variant keys, unmatched selections) are
/// not represented here: the resolver degrades to "no match" instead.
#[derive(Error, Debug)]
pub enum CommerceError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Cart quantities must be positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// A price in another currency than the cart's.
    #[error("Currency mismatch: cart is {expected}, item is {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// The catalog snapshot is not valid JSON for the data model.
    #[error("Invalid catalog snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}

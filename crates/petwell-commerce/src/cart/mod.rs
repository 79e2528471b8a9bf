//! Shopping cart module.
//!
//! The storefront hands resolved items to a [`CartSink`]; [`Cart`] is the
//! in-memory implementation.

mod cart;
mod sink;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use sink::{AddToCart, CartSink};

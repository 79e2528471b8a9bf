//! Product card module.
//!
//! Variant resolution for one product card: which option values are still
//! selectable, which variant the selection names, what price and badges to
//! show, and whether the item can go in the cart.

mod headless;
mod index;
mod pricing;
mod resolver;
mod selection;
mod view;

pub use headless::ProductCard;
pub use index::VariantIndex;
pub use pricing::{discount_percentage, PriceSource, PricedTarget};
pub use resolver::{resolve, VariantResolver};
pub use selection::{Selection, SelectionState};
pub use view::{Badge, OptionValueView, OptionView, ProductCardView};

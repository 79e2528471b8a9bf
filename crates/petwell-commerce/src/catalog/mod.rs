//! Product catalog module.
//!
//! Contains types for products, options, variants, stock and collections.

mod audit;
mod collection;
mod inventory;
mod product;
mod snapshot;

pub use audit::{check_variant_key, duplicate_slugs, CatalogIssue};
pub use collection::{Collection, CollectionIndex, MembershipLookup};
pub use inventory::Stock;
pub use product::{Product, ProductOption, ProductVariant};
pub use snapshot::Catalog;

pub(crate) use product::effective_compare_at;

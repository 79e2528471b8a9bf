//! Search module.
//!
//! Catalog filtering by collection and by pet-type / life-stage facets.

mod filter;
mod listing;
mod query;

pub use filter::{filter_by_collection, filter_by_tags, Facet, LifeStage, PetType, ALL};
pub use listing::{CatalogListing, EMPTY_MESSAGE};
pub use query::CatalogQuery;

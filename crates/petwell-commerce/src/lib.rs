//! Storefront commerce core for Petwell.
//!
//! This crate holds the decision logic behind the storefront UI:
//!
//! - **Catalog**: Products, options, variants, stock, collections, audits
//! - **Card**: Variant resolution, pricing and add-to-cart eligibility per product card
//! - **Search**: Collection and pet-type / life-stage filtering
//! - **Cart**: The add-to-cart seam and an in-memory cart
//!
//! Everything is synchronous and pure over already-loaded catalog data.
//! Fetching that data is the host's job.
//!
//! # Example
//!
//! ```rust
//! use petwell_commerce::prelude::*;
//!
//! let product = Product::new("p1", "Calming Chews", "calming-chews", Money::new(1000, Currency::USD))
//!     .with_option(ProductOption::new("Size", ["S", "M"]))
//!     .with_variant(
//!         ProductVariant::new("v-m", Money::new(1000, Currency::USD))
//!             .with_option("Size", "M")
//!             .with_compare_at(Money::new(2000, Currency::USD))
//!             .with_stock(Stock::Limited(5)),
//!     );
//!
//! let mut card = ProductCard::new(&product);
//! card.handle_option_change("Size", "M");
//! assert_eq!(card.discount_percentage(), Some(50));
//!
//! let mut cart = Cart::new(Currency::USD);
//! assert!(card.handle_add_to_cart(&mut cart).unwrap());
//! assert_eq!(cart.subtotal().unwrap().display(), "$10.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod card;
pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{format_money, Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{format_money, Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogIssue, Collection, CollectionIndex, MembershipLookup, Product,
        ProductOption, ProductVariant, Stock,
    };

    // Card
    pub use crate::card::{
        resolve, Badge, OptionValueView, OptionView, PriceSource, ProductCard, ProductCardView,
        Selection, SelectionState, VariantResolver,
    };

    // Search
    pub use crate::search::{
        filter_by_collection, filter_by_tags, CatalogListing, CatalogQuery, Facet, LifeStage,
        PetType,
    };

    // Cart
    pub use crate::cart::{AddToCart, Cart, CartSink, LineItem};
}

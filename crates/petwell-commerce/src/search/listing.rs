//! Page-level product listing.

use crate::card::{resolve, ProductCardView, Selection};
use crate::catalog::{Catalog, Product};
use crate::search::CatalogQuery;

/// Shown when filters leave nothing to display.
pub const EMPTY_MESSAGE: &str = "No products match your selection. Try adjusting your filters.";

/// The product section of the storefront home page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogListing<'a> {
    /// Section heading.
    pub heading: String,
    /// Active facet description, if any.
    pub filter_label: Option<String>,
    /// True while the catalog has not been loaded yet.
    pub loading: bool,
    /// Whether the "View All" reset applies.
    pub show_view_all: bool,
    /// Products to display, in catalog order.
    pub products: Vec<&'a Product>,
}

impl<'a> CatalogListing<'a> {
    /// Build the listing. A catalog that is not loaded yet yields an empty
    /// listing flagged as loading.
    pub fn build(catalog: Option<&'a Catalog>, query: &CatalogQuery) -> Self {
        let Some(catalog) = catalog else {
            return Self {
                heading: "All Products".to_string(),
                filter_label: query.filter_label(),
                loading: true,
                show_view_all: query.collection.is_some(),
                products: Vec::new(),
            };
        };

        Self {
            heading: query.heading(catalog),
            filter_label: query.filter_label(),
            loading: false,
            show_view_all: query.collection.is_some(),
            products: query.apply(catalog),
        }
    }

    /// Whether there is nothing to show once loaded.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.products.is_empty()
    }

    /// Message for an empty listing.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_MESSAGE)
    }

    /// Card views for each product with a freshly seeded selection.
    pub fn cards(&self) -> Vec<ProductCardView> {
        self.products
            .iter()
            .map(|p| resolve(p, &Selection::seeded(p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{self, SubscriberExt};
    use tracing_subscriber::Layer;

    #[test]
    fn test_not_loaded_catalog_is_empty_and_loading() {
        let listing = CatalogListing::build(None, &CatalogQuery::new().with_collection("c1"));
        assert!(listing.loading);
        assert!(listing.products.is_empty());
        assert!(listing.show_view_all);
        assert_eq!(listing.empty_message(), None);
    }

    #[test]
    fn test_empty_result_message() {
        let catalog = Catalog::new(
            vec![Product::new("p1", "Chews", "chews", Money::new(900, Currency::USD)).with_tags(["dog"])],
            Vec::new(),
        );
        let listing = CatalogListing::build(Some(&catalog), &CatalogQuery::new().with_pet_type("cat"));
        assert!(listing.is_empty());
        assert_eq!(listing.empty_message(), Some(EMPTY_MESSAGE));
        assert_eq!(listing.filter_label.as_deref(), Some("cat"));
    }

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: layer::Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_inert_variant_warns_once_per_load_not_per_render() {
        let json = r#"{"products": [
            {"id": "p1", "title": "Bowl", "slug": "bowl",
             "options": [{"id": "size", "name": "Size", "values": ["S"]}],
             "variants": [
                {"id": "v1", "options": {"Size": "S"}, "price": {"amount_cents": 1500, "currency": "USD"}},
                {"id": "v2", "options": {"Size": "XL"}, "price": {"amount_cents": 900, "currency": "USD"}}
             ]}
        ]}"#;

        let mut loaded = None;
        let on_load = count_warnings(|| loaded = Catalog::from_json(json).ok());
        assert_eq!(on_load, 1);

        let catalog = loaded.unwrap();
        let listing = CatalogListing::build(Some(&catalog), &CatalogQuery::new());
        let on_render = count_warnings(|| {
            listing.cards();
            listing.cards();
        });
        assert_eq!(on_render, 0);
        assert_eq!(listing.cards()[0].price_display, "$15.00");
    }

    #[test]
    fn test_cards_render_each_product() {
        let catalog = Catalog::new(
            vec![Product::new("p1", "Chews", "chews", Money::new(900, Currency::USD))],
            Vec::new(),
        );
        let listing = CatalogListing::build(Some(&catalog), &CatalogQuery::new());
        let cards = listing.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].price_display, "$9.00");
        assert!(cards[0].can_add_to_cart);
    }
}

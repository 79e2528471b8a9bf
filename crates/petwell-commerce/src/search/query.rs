//! Catalog query builder.

use crate::catalog::{Catalog, MembershipLookup, Product};
use crate::ids::CollectionId;
use crate::search::{filter_by_collection, filter_by_tags, Facet};
use serde::{Deserialize, Serialize};

/// The shopper's current catalog filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Selected collection; `None` shows every product.
    #[serde(default)]
    pub collection: Option<CollectionId>,
    /// Pet type facet.
    #[serde(default)]
    pub pet_type: Facet,
    /// Life stage facet.
    #[serde(default)]
    pub life_stage: Facet,
}

impl CatalogQuery {
    /// A query that shows everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a collection.
    pub fn with_collection(mut self, collection: impl Into<CollectionId>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Set the pet type facet.
    pub fn with_pet_type(mut self, facet: impl Into<Facet>) -> Self {
        self.pet_type = facet.into();
        self
    }

    /// Set the life stage facet.
    pub fn with_life_stage(mut self, facet: impl Into<Facet>) -> Self {
        self.life_stage = facet.into();
        self
    }

    /// "View All": drop the collection, keep the facets.
    pub fn show_all(&mut self) {
        self.collection = None;
    }

    /// Whether any facet narrows the list.
    pub fn has_facets(&self) -> bool {
        !self.pet_type.is_all() || !self.life_stage.is_all()
    }

    /// Whether anything narrows the list.
    pub fn is_filtered(&self) -> bool {
        self.collection.is_some() || self.has_facets()
    }

    /// Active facet tags joined by spaces (e.g. "dog puppy").
    pub fn filter_label(&self) -> Option<String> {
        let tags: Vec<&str> = [&self.pet_type, &self.life_stage]
            .into_iter()
            .filter_map(Facet::tag)
            .collect();
        if tags.is_empty() {
            None
        } else {
            Some(tags.join(" "))
        }
    }

    /// Section heading: the collection name, or "All Products".
    pub fn heading(&self, catalog: &Catalog) -> String {
        match &self.collection {
            Some(id) => catalog
                .collection(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Products".to_string()),
            None => "All Products".to_string(),
        }
    }

    /// Apply collection membership first, then the tag facets.
    ///
    /// Both are plain predicates, so the order never changes the result;
    /// input order is preserved.
    pub fn apply_with<'a, I, M>(&self, products: I, membership: &M) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
        M: MembershipLookup + ?Sized,
    {
        let in_collection = filter_by_collection(products, self.collection.as_ref(), membership);
        filter_by_tags(in_collection, &self.pet_type, &self.life_stage)
    }

    /// Apply to a whole catalog.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.apply_with(&catalog.products, &catalog.membership())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Collection;
    use crate::money::{Currency, Money};
    use crate::search::{LifeStage, PetType};

    fn catalog() -> Catalog {
        let product = |id: &str, tags: &[&str]| {
            Product::new(id, id, id, Money::new(1000, Currency::USD)).with_tags(tags.iter().copied())
        };
        Catalog::new(
            vec![
                product("a", &["dog", "puppy"]),
                product("b", &["cat", "senior"]),
                product("c", &["dog", "senior"]),
            ],
            vec![Collection::new("joint", "Joint Care").with_products(["b", "c"])],
        )
    }

    #[test]
    fn test_collection_then_facets() {
        let catalog = catalog();
        let query = CatalogQuery::new()
            .with_collection("joint")
            .with_pet_type(PetType::Dog);

        let ids: Vec<&str> = query.apply(&catalog).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
        assert_eq!(query.heading(&catalog), "Joint Care");
        assert_eq!(query.filter_label().as_deref(), Some("dog"));
    }

    #[test]
    fn test_show_all_keeps_facets() {
        let catalog = catalog();
        let mut query = CatalogQuery::new()
            .with_collection("joint")
            .with_life_stage(LifeStage::Senior);
        query.show_all();

        assert!(query.collection.is_none());
        assert!(query.is_filtered());
        assert_eq!(query.heading(&catalog), "All Products");
        assert_eq!(query.apply(&catalog).len(), 2);
    }

    #[test]
    fn test_unfiltered_query() {
        let catalog = catalog();
        let query = CatalogQuery::new();
        assert!(!query.is_filtered());
        assert_eq!(query.filter_label(), None);
        assert_eq!(query.apply(&catalog).len(), 3);
    }

    #[test]
    fn test_missing_collection_heading() {
        let query = CatalogQuery::new().with_collection("gone");
        assert_eq!(query.heading(&catalog()), "Products");
    }
}

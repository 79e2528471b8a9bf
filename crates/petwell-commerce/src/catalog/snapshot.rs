//! A loaded catalog snapshot.

use crate::catalog::{duplicate_slugs, CatalogIssue, Collection, CollectionIndex, Product};
use crate::error::CommerceError;
use crate::ids::{CollectionId, ProductId};
use serde::{Deserialize, Serialize};

/// Products and collections as fetched from the backing store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// Products in display order.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Collections in display order.
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl Catalog {
    /// Create a catalog from already-loaded data.
    pub fn new(products: Vec<Product>, collections: Vec<Collection>) -> Self {
        Self {
            products,
            collections,
        }
    }

    /// Parse a JSON snapshot.
    ///
    /// Variants the resolver will skip are logged here, once per load.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        for issue in catalog.audit().iter().filter(|i| i.disables_variant()) {
            tracing::warn!(%issue, "variant is inert");
        }
        tracing::debug!(
            products = catalog.products.len(),
            collections = catalog.collections.len(),
            "catalog snapshot loaded"
        );
        Ok(catalog)
    }

    /// Find a product by ID.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Find a product by slug.
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Find a product by slug, falling back to ID.
    pub fn find_product(&self, slug_or_id: &str) -> Result<&Product, CommerceError> {
        self.product_by_slug(slug_or_id)
            .or_else(|| self.product(&ProductId::new(slug_or_id)))
            .ok_or_else(|| CommerceError::ProductNotFound(slug_or_id.to_string()))
    }

    /// Find a collection by ID.
    pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| &c.id == id)
    }

    /// Find a collection by ID, or fail with `CollectionNotFound`.
    pub fn find_collection(&self, id: &str) -> Result<&Collection, CommerceError> {
        self.collection(&CollectionId::new(id))
            .ok_or_else(|| CommerceError::CollectionNotFound(id.to_string()))
    }

    /// Featured collections, in catalog order.
    pub fn featured_collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter().filter(|c| c.featured)
    }

    /// Build a membership index over the collections.
    pub fn membership(&self) -> CollectionIndex {
        CollectionIndex::build(&self.collections)
    }

    /// Audit every product, plus catalog-wide slug uniqueness.
    pub fn audit(&self) -> Vec<CatalogIssue> {
        let mut issues: Vec<CatalogIssue> =
            self.products.iter().flat_map(Product::audit).collect();
        issues.extend(duplicate_slugs(&self.products));
        issues
    }

    /// Check if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "products": [
            {"id": "p1", "title": "Calming Chews", "slug": "calming-chews", "tags": ["dog", "adult"],
             "price": {"amount_cents": 2499, "currency": "USD"}},
            {"id": "p2", "title": "Hairball Relief", "slug": "hairball-relief", "tags": ["cat"],
             "price": {"amount_cents": 1899, "currency": "USD"}}
        ],
        "collections": [
            {"id": "c1", "name": "Supplements", "featured": true, "product_ids": ["p1", "p2"]},
            {"id": "c2", "name": "Treats"}
        ]
    }"#;

    #[test]
    fn test_load_snapshot() {
        let catalog = Catalog::from_json(SNAPSHOT).unwrap();
        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.featured_collections().count(), 1);
        assert!(catalog.collection(&"c2".into()).unwrap().is_empty());
        assert!(catalog.audit().is_empty());
    }

    #[test]
    fn test_find_product_by_slug_or_id() {
        let catalog = Catalog::from_json(SNAPSHOT).unwrap();
        assert_eq!(catalog.find_product("hairball-relief").unwrap().id.as_str(), "p2");
        assert_eq!(catalog.find_product("p1").unwrap().slug, "calming-chews");
        assert!(matches!(
            catalog.find_product("nope"),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_find_collection() {
        let catalog = Catalog::from_json(SNAPSHOT).unwrap();
        assert_eq!(catalog.find_collection("c1").unwrap().len(), 2);
        assert!(matches!(
            catalog.find_collection("c9"),
            Err(CommerceError::CollectionNotFound(id)) if id == "c9"
        ));
    }

    #[test]
    fn test_bad_json_is_invalid_snapshot() {
        assert!(matches!(
            Catalog::from_json("{\"products\": 3}"),
            Err(CommerceError::InvalidSnapshot(_))
        ));
    }
}

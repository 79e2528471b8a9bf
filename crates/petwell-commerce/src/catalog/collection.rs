//! Collections and product membership.

use std::collections::{HashMap, HashSet};

use crate::ids::{CollectionId, ProductId};
use serde::{Deserialize, Serialize};

/// A curated group of products.
///
/// A collection references products by ID; it never owns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Unique collection identifier.
    pub id: CollectionId,
    /// Collection name.
    pub name: String,
    /// Collection description.
    #[serde(default)]
    pub description: Option<String>,
    /// Collection image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Whether the collection is featured.
    #[serde(default)]
    pub featured: bool,
    /// Member products.
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            image: None,
            featured: false,
            product_ids: Vec::new(),
        }
    }

    /// Add member products.
    pub fn with_products<I, P>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ProductId>,
    {
        for id in ids {
            let id = id.into();
            if !self.product_ids.contains(&id) {
                self.product_ids.push(id);
            }
        }
        self
    }

    /// Check membership.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.product_ids.contains(product_id)
    }

    /// Number of member products.
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    /// Check if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}

/// Answers "is this product in that collection?".
///
/// The membership relation may live in the backing store; anything that can
/// answer the question can drive the collection filter.
pub trait MembershipLookup {
    /// Whether `collection` is known at all.
    fn has_collection(&self, collection: &CollectionId) -> bool;

    /// Whether `product` is a member of `collection`.
    fn contains(&self, collection: &CollectionId, product: &ProductId) -> bool;
}

/// Precomputed membership sets keyed by collection.
#[derive(Debug, Clone, Default)]
pub struct CollectionIndex {
    members: HashMap<CollectionId, HashSet<ProductId>>,
}

impl CollectionIndex {
    /// Build the index from collection definitions.
    pub fn build<'a>(collections: impl IntoIterator<Item = &'a Collection>) -> Self {
        let members = collections
            .into_iter()
            .map(|c| (c.id.clone(), c.product_ids.iter().cloned().collect()))
            .collect();
        Self { members }
    }
}

impl MembershipLookup for CollectionIndex {
    fn has_collection(&self, collection: &CollectionId) -> bool {
        self.members.contains_key(collection)
    }

    fn contains(&self, collection: &CollectionId, product: &ProductId) -> bool {
        self.members
            .get(collection)
            .map(|set| set.contains(product))
            .unwrap_or(false)
    }
}

impl MembershipLookup for [Collection] {
    fn has_collection(&self, collection: &CollectionId) -> bool {
        self.iter().any(|c| &c.id == collection)
    }

    fn contains(&self, collection: &CollectionId, product: &ProductId) -> bool {
        self.iter()
            .find(|c| &c.id == collection)
            .map(|c| c.contains(product))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_membership() {
        let collections = vec![
            Collection::new("supplements", "Supplements").with_products(["p1", "p2"]),
            Collection::new("treats", "Treats").with_products(["p3"]),
        ];
        let index = CollectionIndex::build(&collections);

        assert!(index.has_collection(&"treats".into()));
        assert!(!index.has_collection(&"toys".into()));
        assert!(index.contains(&"supplements".into(), &"p2".into()));
        assert!(!index.contains(&"supplements".into(), &"p3".into()));
        assert!(!index.contains(&"toys".into(), &"p1".into()));
    }

    #[test]
    fn test_slice_lookup_matches_index() {
        let collections = vec![Collection::new("c1", "One").with_products(["p1", "p1"])];
        assert_eq!(collections[0].len(), 1);
        let lookup: &[Collection] = &collections;
        assert!(MembershipLookup::contains(lookup, &"c1".into(), &"p1".into()));
        assert!(!MembershipLookup::contains(lookup, &"c1".into(), &"p2".into()));
    }
}

//! Catalog facet and collection filters.
//!
//! Tag matching is exact, case-sensitive string membership with no
//! normalization: a product tagged "Dog" does not match the "dog" facet.
//! Catalog tags are expected to be lowercase already; fix the data, not the
//! comparison.

use std::fmt;

use crate::catalog::{MembershipLookup, Product};
use crate::ids::CollectionId;
use serde::{Deserialize, Serialize};

/// The wildcard facet value.
pub const ALL: &str = "all";

/// One facet choice: everything, or products carrying a specific tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Facet {
    #[default]
    All,
    Tag(String),
}

impl Facet {
    /// Parse a facet value; only the exact string "all" is the wildcard.
    pub fn parse(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == ALL {
            Facet::All
        } else {
            Facet::Tag(value)
        }
    }

    /// Check if this facet lets everything through.
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    /// The required tag, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Facet::All => None,
            Facet::Tag(tag) => Some(tag.as_str()),
        }
    }

    /// Whether `product` passes this facet.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Facet::All => true,
            Facet::Tag(tag) => product.has_tag(tag),
        }
    }
}

impl From<String> for Facet {
    fn from(value: String) -> Self {
        Facet::parse(value)
    }
}

impl From<&str> for Facet {
    fn from(value: &str) -> Self {
        Facet::parse(value)
    }
}

impl From<Facet> for String {
    fn from(facet: Facet) -> Self {
        facet.to_string()
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => write!(f, "{}", ALL),
            Facet::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

/// Pet types the storefront offers as a facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
}

impl PetType {
    pub const ALL: [PetType; 2] = [PetType::Dog, PetType::Cat];

    /// The catalog tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dog" => Some(PetType::Dog),
            "cat" => Some(PetType::Cat),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PetType::Dog => "Dogs",
            PetType::Cat => "Cats",
        }
    }
}

impl From<PetType> for Facet {
    fn from(pet: PetType) -> Self {
        Facet::Tag(pet.as_str().to_string())
    }
}

/// Life stages the storefront offers as a facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStage {
    /// Puppies and kittens share the "puppy" tag.
    Puppy,
    Adult,
    Senior,
}

impl LifeStage {
    pub const ALL: [LifeStage; 3] = [LifeStage::Puppy, LifeStage::Adult, LifeStage::Senior];

    /// The catalog tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeStage::Puppy => "puppy",
            LifeStage::Adult => "adult",
            LifeStage::Senior => "senior",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "puppy" => Some(LifeStage::Puppy),
            "adult" => Some(LifeStage::Adult),
            "senior" => Some(LifeStage::Senior),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LifeStage::Puppy => "Puppy/Kitten",
            LifeStage::Adult => "Adult",
            LifeStage::Senior => "Senior",
        }
    }
}

impl From<LifeStage> for Facet {
    fn from(stage: LifeStage) -> Self {
        Facet::Tag(stage.as_str().to_string())
    }
}

/// Products belonging to `collection`, in input order.
///
/// `None` means "View All" and returns every product. An unknown collection
/// matches nothing.
pub fn filter_by_collection<'a, I, M>(
    products: I,
    collection: Option<&CollectionId>,
    membership: &M,
) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
    M: MembershipLookup + ?Sized,
{
    let Some(collection) = collection else {
        return products.into_iter().collect();
    };
    if !membership.has_collection(collection) {
        tracing::debug!(%collection, "filtering by unknown collection");
    }
    products
        .into_iter()
        .filter(|p| membership.contains(collection, &p.id))
        .collect()
}

/// Products passing both facets, in input order.
pub fn filter_by_tags<'a, I>(products: I, pet_type: &Facet, life_stage: &Facet) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| pet_type.matches(p) && life_stage.matches(p))
        .collect()
}

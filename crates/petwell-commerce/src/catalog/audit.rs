//! Catalog data checks.
//!
//! None of these problems stop a page from rendering. The resolver treats a
//! bad variant as inert and carries on; the audit just makes the problems
//! visible to whoever maintains the catalog.

use std::collections::HashMap;
use std::fmt;

use crate::catalog::{effective_compare_at, Product, ProductVariant};
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::Serialize;

/// A data problem found in a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    /// An option lists the same value twice.
    DuplicateOptionValue {
        product: ProductId,
        option: String,
        value: String,
    },
    /// A variant key names an option the product does not declare.
    UnknownOption {
        product: ProductId,
        variant: VariantId,
        option: String,
    },
    /// A variant key uses a value its option does not list.
    UnknownValue {
        product: ProductId,
        variant: VariantId,
        option: String,
        value: String,
    },
    /// A variant key has no value for a declared option.
    MissingOption {
        product: ProductId,
        variant: VariantId,
        option: String,
    },
    /// Two variants share a combination key.
    DuplicateCombination {
        product: ProductId,
        variant: VariantId,
        first: VariantId,
    },
    /// A compare-at price that is not above the price; it is never shown.
    CompareAtNotAbovePrice {
        product: ProductId,
        variant: Option<VariantId>,
    },
    /// A price below zero. Its compare-at price is never shown.
    NegativePrice {
        product: ProductId,
        variant: Option<VariantId>,
    },
    /// Two products share a slug.
    DuplicateSlug { slug: String, product: ProductId },
}

impl CatalogIssue {
    /// Whether the issue makes a variant inert.
    pub fn disables_variant(&self) -> bool {
        matches!(
            self,
            CatalogIssue::UnknownOption { .. }
                | CatalogIssue::UnknownValue { .. }
                | CatalogIssue::MissingOption { .. }
                | CatalogIssue::DuplicateCombination { .. }
        )
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateOptionValue {
                product,
                option,
                value,
            } => write!(f, "{product}: option '{option}' lists '{value}' more than once"),
            CatalogIssue::UnknownOption {
                product,
                variant,
                option,
            } => write!(f, "{product}/{variant}: unknown option '{option}'"),
            CatalogIssue::UnknownValue {
                product,
                variant,
                option,
                value,
            } => write!(f, "{product}/{variant}: '{value}' is not a value of '{option}'"),
            CatalogIssue::MissingOption {
                product,
                variant,
                option,
            } => write!(f, "{product}/{variant}: no value for option '{option}'"),
            CatalogIssue::DuplicateCombination {
                product,
                variant,
                first,
            } => write!(f, "{product}/{variant}: same combination as {first}"),
            CatalogIssue::CompareAtNotAbovePrice { product, variant } => match variant {
                Some(variant) => write!(f, "{product}/{variant}: compare-at price not above price"),
                None => write!(f, "{product}: compare-at price not above price"),
            },
            CatalogIssue::NegativePrice { product, variant } => match variant {
                Some(variant) => write!(f, "{product}/{variant}: price is negative"),
                None => write!(f, "{product}: price is negative"),
            },
            CatalogIssue::DuplicateSlug { slug, product } => {
                write!(f, "{product}: slug '{slug}' already used")
            }
        }
    }
}

/// Check a variant's combination key against the product's options.
///
/// Returns the first problem found; duplicates across variants are not
/// detected here.
pub fn check_variant_key(product: &Product, variant: &ProductVariant) -> Option<CatalogIssue> {
    for (name, value) in &variant.options {
        match product.option(name) {
            None => {
                return Some(CatalogIssue::UnknownOption {
                    product: product.id.clone(),
                    variant: variant.id.clone(),
                    option: name.clone(),
                })
            }
            Some(option) if !option.has_value(value) => {
                return Some(CatalogIssue::UnknownValue {
                    product: product.id.clone(),
                    variant: variant.id.clone(),
                    option: name.clone(),
                    value: value.clone(),
                })
            }
            Some(_) => {}
        }
    }

    product
        .options
        .iter()
        .find(|o| variant.value_of(&o.name).is_none())
        .map(|o| CatalogIssue::MissingOption {
            product: product.id.clone(),
            variant: variant.id.clone(),
            option: o.name.clone(),
        })
}

impl Product {
    /// Collect every data problem in this product.
    pub fn audit(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for option in &self.options {
            let mut seen: Vec<&str> = Vec::with_capacity(option.values.len());
            for value in &option.values {
                if seen.contains(&value.as_str()) {
                    issues.push(CatalogIssue::DuplicateOptionValue {
                        product: self.id.clone(),
                        option: option.name.clone(),
                        value: value.clone(),
                    });
                } else {
                    seen.push(value);
                }
            }
        }

        let mut keys: HashMap<Vec<&str>, &VariantId> = HashMap::new();
        for variant in &self.variants {
            if let Some(issue) = check_variant_key(self, variant) {
                issues.push(issue);
                continue;
            }
            let key: Vec<&str> = self
                .options
                .iter()
                .filter_map(|o| variant.value_of(&o.name))
                .collect();
            if let Some(first) = keys.get(&key) {
                issues.push(CatalogIssue::DuplicateCombination {
                    product: self.id.clone(),
                    variant: variant.id.clone(),
                    first: (*first).clone(),
                });
            } else {
                keys.insert(key, &variant.id);
            }
        }

        self.check_price(&mut issues, None, &self.price, self.compare_at_price.as_ref());
        for variant in &self.variants {
            self.check_price(
                &mut issues,
                Some(&variant.id),
                &variant.price,
                variant.compare_at_price.as_ref(),
            );
        }

        issues
    }

    fn check_price(
        &self,
        issues: &mut Vec<CatalogIssue>,
        variant: Option<&VariantId>,
        price: &Money,
        compare_at: Option<&Money>,
    ) {
        if price.amount_cents < 0 {
            issues.push(CatalogIssue::NegativePrice {
                product: self.id.clone(),
                variant: variant.cloned(),
            });
        } else if compare_at.is_some() && effective_compare_at(price, compare_at).is_none() {
            issues.push(CatalogIssue::CompareAtNotAbovePrice {
                product: self.id.clone(),
                variant: variant.cloned(),
            });
        }
    }
}

/// Products sharing a slug, after the first.
pub fn duplicate_slugs(products: &[Product]) -> Vec<CatalogIssue> {
    let mut seen: HashMap<&str, &ProductId> = HashMap::new();
    let mut issues = Vec::new();
    for product in products {
        if seen.insert(&product.slug, &product.id).is_some() {
            issues.push(CatalogIssue::DuplicateSlug {
                slug: product.slug.clone(),
                product: product.id.clone(),
            });
        }
    }
    issues
}

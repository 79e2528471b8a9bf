//! Product, option and variant types.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::catalog::Stock;
use crate::ids::{OptionId, ProductId, VariantId};
use crate::money::Money;
use regex::Regex;
use serde::{Deserialize, Serialize};

fn markup_tag_re() -> &'static Regex {
    static MARKUP_TAG_RE: OnceLock<Regex> = OnceLock::new();
    MARKUP_TAG_RE.get_or_init(|| Regex::new(r"<[^<>]*>").expect("valid regex"))
}

/// A product in the catalog.
///
/// Products are read-only snapshots: nothing in this crate mutates one after
/// it has been loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Rich-text description (may contain HTML).
    #[serde(default)]
    pub description: Option<String>,
    /// Image URLs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Configurable options (e.g., Color, Size).
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Purchasable option combinations.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    /// Facet tags (pet type, life stage, ...).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the product is featured.
    #[serde(default)]
    pub featured: bool,
    /// Base price, used when no variant carries the price.
    #[serde(default)]
    pub price: Money,
    /// Base compare-at price.
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    /// Base stock, used by products sold without a variant row.
    #[serde(default)]
    pub stock: Stock,
}

impl Product {
    /// Create a product with no options or variants.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        slug: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            description: None,
            images: Vec::new(),
            options: Vec::new(),
            variants: Vec::new(),
            tags: Vec::new(),
            featured: false,
            price,
            compare_at_price: None,
            stock: Stock::Unlimited,
        }
    }

    /// Add an option definition.
    pub fn with_option(mut self, option: ProductOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add a variant.
    pub fn with_variant(mut self, variant: ProductVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Add facet tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.add_tag(tag);
        }
        self
    }

    /// Set the base stock.
    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock = stock;
        self
    }

    /// Add a tag to this product.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check if the product declares any option.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Look up an option definition by name.
    pub fn option(&self, name: &str) -> Option<&ProductOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Look up a variant by ID.
    pub fn variant(&self, id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// First product image.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Description with markup tags removed, for card excerpts.
    ///
    /// Only complete `<...>` tags are removed. A tag cannot contain `<`, so a
    /// stray `<` in the copy stays in the text.
    pub fn plain_description(&self) -> Option<String> {
        let html = self.description.as_deref()?;
        Some(markup_tag_re().replace_all(html, "").into_owned())
    }

    /// Variant title built from its values in option declaration order
    /// (e.g., "Red / M").
    pub fn variant_title(&self, variant: &ProductVariant) -> String {
        if self.options.is_empty() {
            return "Default".to_string();
        }
        self.options
            .iter()
            .filter_map(|o| variant.value_of(&o.name))
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// A configurable product attribute and its values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductOption {
    /// Option identifier.
    pub id: OptionId,
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Values in display order.
    pub values: Vec<String>,
    /// Value -> CSS color. Only consulted for options named "color".
    #[serde(default)]
    pub swatches: BTreeMap<String, String>,
}

impl ProductOption {
    /// Create an option; the ID is derived from the lowercased name.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        Self {
            id: OptionId::new(name.to_lowercase()),
            name,
            values: values.into_iter().map(Into::into).collect(),
            swatches: BTreeMap::new(),
        }
    }

    /// Attach a swatch color to a value.
    pub fn with_swatch(mut self, value: impl Into<String>, color: impl Into<String>) -> Self {
        self.swatches.insert(value.into(), color.into());
        self
    }

    /// Check if `value` is one of this option's values.
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Whether this option renders as color swatches.
    ///
    /// The storefront only ever renders swatches for an option literally
    /// named "color" (any case). Other option names never get swatches even
    /// when a swatch map is present.
    pub fn is_color(&self) -> bool {
        self.name.eq_ignore_ascii_case("color")
    }

    /// Swatch color for a value, if this is a color option and one is set.
    pub fn swatch_for(&self, value: &str) -> Option<&str> {
        if !self.is_color() {
            return None;
        }
        self.swatches.get(value).map(String::as_str)
    }
}

/// One purchasable combination of option values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Combination key: option name -> value, one entry per product option.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    /// Price of this variant.
    pub price: Money,
    /// Compare-at price (original price for showing discounts).
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    /// Stock on hand.
    #[serde(default)]
    pub stock: Stock,
    /// Variant-specific image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl ProductVariant {
    /// Create a variant with unlimited stock and an empty combination key.
    pub fn new(id: impl Into<VariantId>, price: Money) -> Self {
        Self {
            id: id.into(),
            options: BTreeMap::new(),
            price,
            compare_at_price: None,
            stock: Stock::Unlimited,
            image: None,
        }
    }

    /// Set one entry of the combination key.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Set the stock.
    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock = stock;
        self
    }

    /// Set the compare-at price.
    pub fn with_compare_at(mut self, compare_at: Money) -> Self {
        self.compare_at_price = Some(compare_at);
        self
    }

    /// Set the variant image.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Value this variant carries for `option`.
    pub fn value_of(&self, option: &str) -> Option<&str> {
        self.options.get(option).map(String::as_str)
    }

    /// Check if this variant is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock.is_available()
    }

    /// Compare-at price, only when it actually represents a discount.
    pub fn effective_compare_at(&self) -> Option<Money> {
        effective_compare_at(&self.price, self.compare_at_price.as_ref())
    }
}

/// A compare-at price counts only when strictly above a non-negative price,
/// in the same currency.
pub(crate) fn effective_compare_at(price: &Money, compare_at: Option<&Money>) -> Option<Money> {
    if price.amount_cents < 0 {
        return None;
    }
    compare_at
        .filter(|cap| cap.currency == price.currency && cap.amount_cents > price.amount_cents)
        .copied()
}

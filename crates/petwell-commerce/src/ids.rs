//! Newtype IDs.
//!
//! Catalog IDs come from the backing store as opaque strings and are never
//! minted here. Cart and line item IDs are generated locally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Product identifier from the catalog.
    ProductId
);
define_id!(
    /// Variant identifier from the catalog.
    VariantId
);
define_id!(
    /// Option identifier, typically the lowercased option name.
    OptionId
);
define_id!(
    /// Collection identifier from the catalog.
    CollectionId
);
define_id!(CartId);
define_id!(LineItemId);

impl CartId {
    /// Mint a process-unique cart ID.
    pub fn generate() -> Self {
        Self(next_local_id("cart"))
    }
}

impl LineItemId {
    /// Mint a process-unique line item ID.
    pub fn generate() -> Self {
        Self(next_local_id("line"))
    }
}

/// `{prefix}-{clock:x}-{seq:x}`; the sequence keeps IDs distinct within a
/// single clock tick.
fn next_local_id(prefix: &str) -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);

    let clock = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);

    format!("{prefix}-{clock:x}-{seq:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_and_prefixed() {
        let a = LineItemId::generate();
        let b = LineItemId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("line-"));
        assert!(CartId::generate().as_str().starts_with("cart-"));
    }

    #[test]
    fn test_id_from_str_and_display() {
        let id: CollectionId = "col-supplements".into();
        assert_eq!(id.as_str(), "col-supplements");
        assert_eq!(id.to_string(), "col-supplements");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("prod-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"prod-1\"");
        let back: ProductId = serde_json::from_str("\"prod-1\"").unwrap();
        assert_eq!(back, id);
    }
}

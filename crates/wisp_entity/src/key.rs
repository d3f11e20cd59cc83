//! Component keys.
//!
//! A key is a case-sensitive, opaque byte sequence identifying one component
//! within an entity's mapping. Keys order byte-wise (the derived `Ord` on the
//! backing string), which is exactly the lexicographic sort that archetype
//! generation relies on.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::error::EntityError;
use crate::value::Value;

/// An interned component identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentKey(String);

impl ComponentKey {
    /// Create a key from a known-good text identifier.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Coerce a dynamic value into a key.
    ///
    /// Only text-like kinds qualify: [`Value::Str`] and [`Value::Symbol`].
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::KeyKind`] for every other kind.
    pub fn coerce(value: Value) -> Result<Self, EntityError> {
        match value {
            Value::Str(s) | Value::Symbol(s) => Ok(Self(s)),
            other => Err(EntityError::KeyKind { kind: other.kind() }),
        }
    }

    /// Returns the key's textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ComponentKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

// Lets `&str` look keys up in a `BTreeMap<ComponentKey, _>` without an
// allocation. Sound because the key orders exactly like its backing string.
impl Borrow<str> for ComponentKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_coerce_accepts_text_kinds() {
        assert_eq!(
            ComponentKey::coerce(Value::from("pos")).unwrap().as_str(),
            "pos"
        );
        assert_eq!(
            ComponentKey::coerce(Value::symbol("vel")).unwrap().as_str(),
            "vel"
        );
    }

    #[test]
    fn test_coerce_rejects_non_text_kinds() {
        let err = ComponentKey::coerce(Value::Int(7)).unwrap_err();
        assert_eq!(err, EntityError::KeyKind {
            kind: ValueKind::Int
        });

        let err = ComponentKey::coerce(Value::List(Vec::new())).unwrap_err();
        assert_eq!(err, EntityError::KeyKind {
            kind: ValueKind::List
        });
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert_ne!(ComponentKey::from("Pos"), ComponentKey::from("pos"));
    }

    #[test]
    fn test_keys_order_byte_wise() {
        // Uppercase sorts before lowercase in byte order.
        assert!(ComponentKey::from("Z") < ComponentKey::from("a"));
        assert!(ComponentKey::from("pos") < ComponentKey::from("vel"));
    }
}

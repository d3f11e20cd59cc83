//! Dynamically typed component values.
//!
//! The scripting host attaches values of any representable kind to entity
//! components — scalars, containers, references to other entities, even
//! references to callable host logic. No schema is enforced; a [`Value`]
//! carries its own kind tag.
//!
//! [`Value::Absent`] is the "no value" marker: it is what a component holds
//! when attached bare, and what lookups return for a key that was never set.
//! Absence is represented, never signalled as an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// An opaque handle to executable host logic.
///
/// The host assigns these; this core stores and transports them but never
/// invokes the code behind one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallbackRef(pub u64);

impl CallbackRef {
    /// Create a callback reference from a raw host-assigned handle.
    #[must_use]
    pub const fn from_raw(handle: u64) -> Self {
        Self(handle)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn handle(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CallbackRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Callback({})", self.0)
    }
}

/// A dynamically typed value stored under a component key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// The "no value" marker, distinct from every user value.
    #[default]
    Absent,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A text string.
    Str(String),
    /// A symbol-like identifier. Coerces to a component key, like [`Value::Str`].
    Symbol(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A string-keyed mapping of values.
    Map(BTreeMap<String, Value>),
    /// A reference to another entity by id.
    Entity(EntityId),
    /// A reference to callable host logic.
    Callable(CallbackRef),
}

impl Value {
    /// Construct a symbol value.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Returns `true` for the [`Value::Absent`] marker.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Symbol(_) => ValueKind::Symbol,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
            Self::Entity(_) => ValueKind::Entity,
            Self::Callable(_) => ValueKind::Callable,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl From<EntityId> for Value {
    fn from(v: EntityId) -> Self {
        Self::Entity(v)
    }
}

impl From<CallbackRef> for Value {
    fn from(v: CallbackRef) -> Self {
        Self::Callable(v)
    }
}

/// The kind of a [`Value`], reported in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    Absent,
    Bool,
    Int,
    Float,
    Str,
    Symbol,
    List,
    Map,
    Entity,
    Callable,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "string",
            Self::Symbol => "symbol",
            Self::List => "list",
            Self::Map => "map",
            Self::Entity => "entity",
            Self::Callable => "callable",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_default() {
        assert!(Value::default().is_absent());
    }

    #[test]
    fn test_absent_distinct_from_user_values() {
        assert_ne!(Value::Absent, Value::Bool(false));
        assert_ne!(Value::Absent, Value::Int(0));
        assert_ne!(Value::Absent, Value::Str(String::new()));
        assert_ne!(Value::Absent, Value::List(Vec::new()));
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(Value::from(1i64).kind(), ValueKind::Int);
        assert_eq!(Value::from("hp").kind(), ValueKind::Str);
        assert_eq!(Value::symbol("hp").kind(), ValueKind::Symbol);
        assert_eq!(Value::from(EntityId::from_raw(7)).kind(), ValueKind::Entity);
        assert_eq!(
            Value::from(CallbackRef::from_raw(3)).kind(),
            ValueKind::Callable
        );
    }

    #[test]
    fn test_value_serialization_roundtrip() {
        let mut map = BTreeMap::new();
        map.insert("x".to_string(), Value::Float(1.5));
        map.insert("y".to_string(), Value::Float(-2.0));
        let value = Value::List(vec![
            Value::Absent,
            Value::Map(map),
            Value::Entity(EntityId::from_raw(42)),
            Value::Callable(CallbackRef::from_raw(9)),
        ]);

        let bytes = rmp_serde::to_vec(&value).unwrap();
        let restored: Value = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(value, restored);
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(ValueKind::Str.to_string(), "string");
        assert_eq!(ValueKind::Callable.to_string(), "callable");
    }
}

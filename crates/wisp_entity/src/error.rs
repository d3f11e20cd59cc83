//! Entity-model error types.
//!
//! The only failable path in this core is key coercion; every other
//! operation is total, and absence of a value is represented by
//! [`Value::Absent`](crate::value::Value::Absent) rather than signalled.

use crate::value::ValueKind;

/// Errors that can occur in the entity model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    /// A component or relationship key argument was not text-like.
    #[error("component key must be a string or symbol, got {kind}")]
    KeyKind {
        /// The kind of the rejected key argument.
        kind: ValueKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_kind_message_names_the_kind() {
        let err = EntityError::KeyKind {
            kind: ValueKind::Float,
        };
        assert_eq!(
            err.to_string(),
            "component key must be a string or symbol, got float"
        );
    }
}

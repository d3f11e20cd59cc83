//! Opaque world handles.
//!
//! The backing ECS world is owned and managed outside this core. Entities
//! and systems keep a back-reference to the world that owns them as a plain
//! handle value — a relation, never ownership, so a stored handle does not
//! extend any world's lifetime.

use serde::{Deserialize, Serialize};

/// A non-owning handle to a backing world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(pub u64);

impl WorldId {
    /// Create a handle from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WorldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "World({})", self.0)
    }
}

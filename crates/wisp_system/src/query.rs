//! Query descriptors for system registration.
//!
//! A [`QueryDescriptor`] declares which component keys a system is
//! interested in: keys matching entities must have (`with`) and keys they
//! must not have (`without`). The declaration is inert — matching entities
//! against it is the job of the engine that consumes the data. What this
//! crate does provide is the descriptor's own archetype fingerprint, the
//! value an external matcher compares against an entity's fingerprint list.

use serde::{Deserialize, Serialize};

use wisp_entity::{ArchetypeFingerprint, ComponentKey};

/// Declares the component keys a system wants matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// Keys a matching entity must have.
    pub with: Vec<ComponentKey>,
    /// Keys a matching entity must not have.
    pub without: Vec<ComponentKey>,
}

impl QueryDescriptor {
    /// Create a new empty query descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a component key.
    #[must_use]
    pub fn with(mut self, key: impl Into<ComponentKey>) -> Self {
        self.with.push(key.into());
        self
    }

    /// Exclude a component key.
    #[must_use]
    pub fn without(mut self, key: impl Into<ComponentKey>) -> Self {
        self.without.push(key.into());
        self
    }

    /// Fingerprint of the sorted required-key set, or `None` when the
    /// descriptor requires nothing.
    ///
    /// Keys are sorted byte-wise before hashing, so the result is the same
    /// fingerprint an entity holding exactly these components puts at
    /// position 0 of its archetype list.
    #[must_use]
    pub fn fingerprint(&self) -> Option<ArchetypeFingerprint> {
        Self::sorted_fingerprint(&self.with)
    }

    /// Fingerprint of the sorted excluded-key set, or `None` when the
    /// descriptor excludes nothing.
    #[must_use]
    pub fn exclusion_fingerprint(&self) -> Option<ArchetypeFingerprint> {
        Self::sorted_fingerprint(&self.without)
    }

    fn sorted_fingerprint(keys: &[ComponentKey]) -> Option<ArchetypeFingerprint> {
        if keys.is_empty() {
            return None;
        }
        let mut sorted: Vec<&str> = keys.iter().map(ComponentKey::as_str).collect();
        sorted.sort_unstable();
        Some(ArchetypeFingerprint::of_keys(sorted))
    }
}

//! The entity record.
//!
//! An [`Entity`] is a mutable bag of named components plus an append-only
//! relationship log. Its archetype fingerprint list is a derived cache: it
//! reflects the component-key set as of the last
//! [`regenerate_archetypes`](Entity::regenerate_archetypes) call and goes
//! stale the moment a key is added or removed. Nothing here keeps it in
//! sync automatically — callers regenerate when they need fresh
//! fingerprints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EntityError;
use crate::fingerprint::{ArchetypeFingerprint, suffix_fingerprints};
use crate::key::ComponentKey;
use crate::value::Value;
use crate::world::WorldId;

/// A unique entity identifier.
///
/// Ids are assigned externally, by whatever backing world the entity is
/// registered with. A fresh entity has no id at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Create an entity id from a raw `u64` identifier.
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

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// One keyed association from an entity to a target entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// The relationship key.
    pub key: ComponentKey,
    /// The entity this relationship points at. Not validated for liveness.
    pub target: EntityId,
}

static ABSENT: Value = Value::Absent;

/// A mutable record of named components and relationships.
///
/// Created empty: no components, no relationships, no archetypes, no id, no
/// world. Every field is mutated through its own accessor pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    components: BTreeMap<ComponentKey, Value>,
    relationships: Vec<Relationship>,
    archetypes: Vec<ArchetypeFingerprint>,
    id: Option<EntityId>,
    world: Option<WorldId>,
    name: Option<String>,
    alias: Option<String>,
}

impl Entity {
    /// Create an empty entity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Component storage ───────────────────────────────────────────────

    /// Insert or overwrite a component.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::KeyKind`] if `key` is not a string or symbol;
    /// the component mapping is left unchanged in that case.
    pub fn set(
        &mut self,
        key: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<(), EntityError> {
        let key = ComponentKey::coerce(key.into())?;
        self.components.insert(key, value.into());
        Ok(())
    }

    /// Attach a component with no value.
    ///
    /// The component holds [`Value::Absent`] until a later [`set`](Self::set)
    /// overwrites it; it still counts as present for
    /// [`has_components`](Self::has_components) and fingerprinting.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::KeyKind`] if `key` is not a string or symbol.
    pub fn attach(&mut self, key: impl Into<Value>) -> Result<(), EntityError> {
        self.set(key, Value::Absent)
    }

    /// Returns the value stored under `key`, or [`Value::Absent`] if the
    /// component was never set. Missing components are not an error.
    #[must_use]
    pub fn get(&self, key: &str) -> &Value {
        self.components.get(key).unwrap_or(&ABSENT)
    }

    /// Returns `true` iff every supplied key is a current component key.
    ///
    /// Short-circuits on the first missing key. With zero keys this is
    /// vacuously true, on any entity.
    #[must_use]
    pub fn has_components<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keys.into_iter()
            .all(|key| self.components.contains_key(key.as_ref()))
    }

    /// Returns `true` iff every supplied key is either a component key or a
    /// relationship key of this entity.
    #[must_use]
    pub fn has<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keys.into_iter().all(|key| {
            let key = key.as_ref();
            self.components.contains_key(key)
                || self.relationships.iter().any(|r| r.key.as_str() == key)
        })
    }

    /// Remove a component, returning its value — [`Value::Absent`] if the
    /// key was not present.
    pub fn remove(&mut self, key: &str) -> Value {
        self.components.remove(key).unwrap_or(Value::Absent)
    }

    /// Borrow the component mapping. Iteration order is byte-wise ascending
    /// over the keys.
    #[must_use]
    pub fn components(&self) -> &BTreeMap<ComponentKey, Value> {
        &self.components
    }

    /// Iterate the current component keys in byte-wise ascending order.
    pub fn component_keys(&self) -> impl Iterator<Item = &ComponentKey> {
        self.components.keys()
    }

    // ── Relationships ───────────────────────────────────────────────────

    /// Append a relationship record.
    ///
    /// Always appends: duplicates are kept, order is preserved, and `target`
    /// is not checked for liveness.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::KeyKind`] if `key` is not a string or symbol.
    pub fn add_relationship(
        &mut self,
        key: impl Into<Value>,
        target: EntityId,
    ) -> Result<(), EntityError> {
        let key = ComponentKey::coerce(key.into())?;
        self.relationships.push(Relationship { key, target });
        Ok(())
    }

    /// Borrow the relationship log, in append order.
    #[must_use]
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    // ── Archetypes ──────────────────────────────────────────────────────

    /// Recompute the archetype fingerprint list from the current component
    /// keys, replacing the stored list wholesale.
    ///
    /// Keys are taken in byte-wise ascending order and fingerprinted by
    /// contiguous suffix: entry 0 covers the full sorted set, the last entry
    /// covers only the greatest single key. An entity with no components
    /// gets an empty list.
    pub fn regenerate_archetypes(&mut self) {
        let keys: Vec<ComponentKey> = self.components.keys().cloned().collect();
        self.archetypes = suffix_fingerprints(&keys);
    }

    /// Borrow the archetype fingerprints as of the last regeneration.
    ///
    /// This is a cache, not live data: component mutations since the last
    /// [`regenerate_archetypes`](Self::regenerate_archetypes) are not
    /// reflected.
    #[must_use]
    pub fn archetypes(&self) -> &[ArchetypeFingerprint] {
        &self.archetypes
    }

    // ── Identity and descriptive attributes ─────────────────────────────

    /// Returns the externally assigned id, if the entity has been registered.
    #[must_use]
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    /// Record the id assigned by a backing world.
    pub fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    /// Returns the handle of the owning world, if any.
    #[must_use]
    pub fn world(&self) -> Option<WorldId> {
        self.world
    }

    /// Record the owning world's handle.
    pub fn set_world(&mut self, world: WorldId) {
        self.world = Some(world);
    }

    /// Returns the descriptive name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the descriptive name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Returns the alias, if set.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Set the alias.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = Some(alias.into());
    }
}

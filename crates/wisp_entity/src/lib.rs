//! # wisp_entity
//!
//! The "E and C" of the scripting-facing ECS core — defines how entities
//! accumulate named components and relationships at runtime, and how their
//! archetype fingerprints are derived for query matching by an external
//! engine.
//!
//! This crate provides:
//!
//! - [`Value`] — dynamically typed component values, as the scripting host
//!   sees them.
//! - [`ComponentKey`] — interned, byte-ordered component identifiers.
//! - [`Entity`] — the mutable component/relationship record.
//! - [`ArchetypeFingerprint`] — FNV-1a fingerprints over sorted component-key
//!   subsets.
//! - [`WorldId`] — opaque, non-owning handle to a backing world.

pub mod entity;
pub mod error;
pub mod fingerprint;
pub mod key;
pub mod value;
pub mod world;

pub use entity::{Entity, EntityId, Relationship};
pub use error::EntityError;
pub use fingerprint::{ArchetypeFingerprint, suffix_fingerprints};
pub use key::ComponentKey;
pub use value::{CallbackRef, Value, ValueKind};
pub use world::WorldId;

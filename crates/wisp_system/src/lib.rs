//! # wisp_system
//!
//! The "S" of the scripting-facing ECS core — the system record and the
//! query descriptor it carries.
//!
//! This crate provides:
//!
//! - [`System`] — a named, enable/disable-toggleable unit pairing a query
//!   descriptor with an opaque callback reference.
//! - [`QueryDescriptor`] — the inert with/without key-list declaration an
//!   external matcher evaluates against entity archetype fingerprints.
//!
//! Nothing here runs: callbacks are stored, never invoked, and queries are
//! declared, never evaluated. Both jobs belong to the engine that consumes
//! this data.

pub mod query;
pub mod system;

pub use query::QueryDescriptor;
pub use system::System;

//! The system record.
//!
//! A [`System`] pairs a query descriptor with an opaque callback reference
//! under a name, plus an enabled/disabled flag the scheduler honours. This
//! core only holds the record; invoking the callback over matched entities
//! happens in the engine that consumes it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use wisp_entity::{CallbackRef, WorldId};

use crate::query::QueryDescriptor;

/// A named, toggleable unit of engine logic.
///
/// Freshly constructed systems are enabled. `enabled ⇄ disabled` transitions
/// happen only through [`enable`](Self::enable) and
/// [`disable`](Self::disable); nothing flips the flag automatically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct System {
    name: Option<String>,
    callback: Option<CallbackRef>,
    query: Option<QueryDescriptor>,
    disabled: bool,
    world: Option<WorldId>,
}

impl System {
    /// Create an unnamed, enabled system with no callback or query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an enabled system with an initial name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the system's name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set or update the system's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Returns the callback reference, if set.
    #[must_use]
    pub fn callback(&self) -> Option<CallbackRef> {
        self.callback
    }

    /// Record the host callback to be invoked when the system runs.
    pub fn set_callback(&mut self, callback: CallbackRef) {
        self.callback = Some(callback);
    }

    /// Returns the query descriptor, if set.
    #[must_use]
    pub fn query(&self) -> Option<&QueryDescriptor> {
        self.query.as_ref()
    }

    /// Set the query descriptor.
    pub fn set_query(&mut self, query: QueryDescriptor) {
        self.query = Some(query);
    }

    /// Returns the handle of the associated world, if any.
    #[must_use]
    pub fn world(&self) -> Option<WorldId> {
        self.world
    }

    /// Record the associated world's handle.
    pub fn set_world(&mut self, world: WorldId) {
        self.world = Some(world);
    }

    /// Returns `true` while the system is switched off.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Switch the system off. The scheduler skips disabled systems.
    pub fn disable(&mut self) {
        self.disabled = true;
        debug!(system = self.name.as_deref().unwrap_or(""), "system disabled");
    }

    /// Switch the system back on.
    pub fn enable(&mut self) {
        self.disabled = false;
        debug!(system = self.name.as_deref().unwrap_or(""), "system enabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_system_is_enabled() {
        assert!(!System::new().is_disabled());
        assert!(!System::named("physics").is_disabled());
    }

    #[test]
    fn test_disable_enable_toggle() {
        let mut s = System::named("physics");
        s.disable();
        assert!(s.is_disabled());
        s.enable();
        assert!(!s.is_disabled());
    }

    #[test]
    fn test_named_constructor_sets_name() {
        let s = System::named("ai");
        assert_eq!(s.name(), Some("ai"));
        assert!(s.callback().is_none());
        assert!(s.query().is_none());
        assert!(s.world().is_none());
    }

    #[test]
    fn test_accessor_pairs() {
        let mut s = System::new();
        s.set_name("movement");
        s.set_callback(CallbackRef::from_raw(11));
        s.set_query(QueryDescriptor::new().with("pos").with("vel"));
        s.set_world(WorldId::from_raw(1));

        assert_eq!(s.name(), Some("movement"));
        assert_eq!(s.callback(), Some(CallbackRef::from_raw(11)));
        assert_eq!(s.query().unwrap().with.len(), 2);
        assert_eq!(s.world(), Some(WorldId::from_raw(1)));
    }

    #[test]
    fn test_name_can_be_updated() {
        let mut s = System::named("draft");
        s.set_name("final");
        assert_eq!(s.name(), Some("final"));
    }

    #[test]
    fn test_system_serialization_roundtrip() {
        let mut s = System::named("physics");
        s.set_callback(CallbackRef::from_raw(4));
        s.set_query(QueryDescriptor::new().with("pos").without("static"));
        s.disable();

        let bytes = rmp_serde::to_vec(&s).unwrap();
        let restored: System = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(s, restored);
    }
}

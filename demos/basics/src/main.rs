//! Basics — builds a few entities, regenerates their archetype fingerprints,
//! and registers a system declaration against them.
//!
//! Everything below is host-side bookkeeping: fingerprints are produced here,
//! but matching them against the system's query is left to whatever engine
//! consumes the data.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wisp_entity::{CallbackRef, Entity, EntityId, Value, WorldId};
use wisp_system::{QueryDescriptor, System};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("basics=info".parse()?))
        .init();

    let world = WorldId::from_raw(1);

    // A player entity: position, velocity, and a bare marker component.
    let mut player = Entity::new();
    player.set_name("player");
    player.set_world(world);
    player.set_id(EntityId::from_raw(1));
    player.set("pos", Value::List(vec![Value::Float(0.0), Value::Float(0.0)]))?;
    player.set("vel", Value::List(vec![Value::Float(1.0), Value::Float(0.5)]))?;
    player.attach("controllable")?;

    // A camera that follows the player.
    let mut camera = Entity::new();
    camera.set_name("camera");
    camera.set_world(world);
    camera.set_id(EntityId::from_raw(2));
    camera.set("pos", Value::List(vec![Value::Float(0.0), Value::Float(0.0)]))?;
    camera.add_relationship(Value::symbol("follows"), EntityId::from_raw(1))?;

    player.regenerate_archetypes();
    camera.regenerate_archetypes();

    for entity in [&player, &camera] {
        info!(
            entity = entity.name().unwrap_or(""),
            components = entity.components().len(),
            "archetypes regenerated"
        );
        for print in entity.archetypes() {
            info!(fingerprint = %print, "archetype");
        }
    }

    // Declare a movement system. The callback handle points at host logic;
    // this process never calls it.
    let mut movement = System::named("movement");
    movement.set_world(world);
    movement.set_callback(CallbackRef::from_raw(0xB00F));
    movement.set_query(QueryDescriptor::new().with("pos").with("vel"));

    let query_print = movement
        .query()
        .and_then(QueryDescriptor::fingerprint)
        .expect("movement query requires keys");
    info!(
        system = movement.name().unwrap_or(""),
        fingerprint = %query_print,
        "system declared; an external matcher compares this against entity archetypes"
    );

    movement.disable();
    info!(disabled = movement.is_disabled(), "toggled off");
    movement.enable();
    info!(disabled = movement.is_disabled(), "toggled back on");

    Ok(())
}

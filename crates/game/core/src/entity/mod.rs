//! Combatants and how they are built.
//!
//! An [`Entity`] is a shared handle: the bare entity, any wrapper around it,
//! and the session all see the same health and damage.
mod builder;
mod handle;
mod kind;

pub use builder::{BuildError, EntityBuilder};
pub use handle::Entity;
pub use kind::EntityKind;

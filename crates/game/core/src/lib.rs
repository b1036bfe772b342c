//! Deterministic two-entity duel logic.
//!
//! `duel-core` defines the combatants, the logging decorator around their
//! strike, and the session that pairs them and snapshots their state.
//! Entities are shared handles, so every view (bare entity, wrapper,
//! session) observes the same live state.
pub mod combat;
pub mod config;
pub mod entity;
pub mod error;
pub mod session;

pub use combat::{CombatError, Combatant, LoggingCombatant, StrikeReport};
pub use config::{DuelConfig, EntitySpec};
pub use entity::{BuildError, Entity, EntityBuilder, EntityKind};
pub use error::{DuelError, ErrorSeverity};
pub use session::{
    EntitySnapshot, Session, SessionError, SessionSnapshot, Slot, SnapshotHistory,
};

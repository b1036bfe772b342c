//! The strike action and the capability set shared by entities and wrappers.
//!
//! [`Combatant`] is the seam: [`Entity`] implements it over its shared state,
//! and [`LoggingCombatant`] implements it by delegating to whatever it wraps.
mod error;
mod logging;
mod report;

pub use error::CombatError;
pub use logging::LoggingCombatant;
pub use report::StrikeReport;

use crate::entity::{Entity, EntityKind};

/// Everything a duel participant can do.
///
/// Methods take `&self` because implementors are handles over shared state;
/// mutation through any view is visible through every other.
pub trait Combatant {
    /// The underlying shared entity handle.
    fn handle(&self) -> Entity;

    fn health(&self) -> i32;

    fn set_health(&self, health: i32);

    fn damage(&self) -> i32;

    fn set_damage(&self, damage: i32);

    fn kind(&self) -> EntityKind;

    fn set_kind(&self, kind: EntityKind);

    fn opponent(&self) -> Option<Entity>;

    fn set_opponent(&self, opponent: &Entity);

    /// Reduce the opponent's health by this combatant's damage.
    ///
    /// Returns `Ok(None)` when there was nobody to hit.
    fn strike(&self) -> Result<Option<StrikeReport>, CombatError>;
}

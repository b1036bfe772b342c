//! Point-in-time copies of session state.
//!
//! Snapshots hold plain values with no link back to the entities they were
//! taken from, so later strikes never change a stored snapshot.

use crate::combat::Combatant;
use crate::entity::EntityKind;

/// Restorable fields of one entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySnapshot {
    pub health: i32,
    pub damage: i32,
    pub kind: EntityKind,
}

impl EntitySnapshot {
    /// Copy the current fields of `combatant`.
    pub fn capture(combatant: &impl Combatant) -> Self {
        Self {
            health: combatant.health(),
            damage: combatant.damage(),
            kind: combatant.kind(),
        }
    }

    /// Overwrite `combatant`'s fields with the stored values.
    pub fn apply_to(&self, combatant: &impl Combatant) {
        combatant.set_health(self.health);
        combatant.set_damage(self.damage);
        combatant.set_kind(self.kind);
    }
}

/// Both entities of a session at the moment [`Session::save`] ran.
///
/// [`Session::save`]: super::Session::save
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub first: EntitySnapshot,
    pub second: EntitySnapshot,
}

use std::fmt;

use crate::entity::EntityKind;

/// Outcome of a single landed strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeReport {
    pub attacker: EntityKind,
    pub defender: EntityKind,
    /// Damage dealt, as read from the attacker at strike time.
    pub damage: i32,
    /// Defender health after the strike; may be negative.
    pub defender_health: i32,
}

impl fmt::Display for StrikeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hit {}, leaving them {} health",
            self.attacker, self.defender, self.defender_health
        )
    }
}

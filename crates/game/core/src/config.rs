use crate::entity::{BuildError, Entity, EntityKind};

/// Starting stats for one combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySpec {
    pub health: i32,
    pub damage: i32,
    pub kind: EntityKind,
}

impl EntitySpec {
    pub const fn new(health: i32, damage: i32, kind: EntityKind) -> Self {
        Self {
            health,
            damage,
            kind,
        }
    }

    /// Build a fresh entity from this spec; negative stats clamp to zero.
    pub fn build(&self) -> Result<Entity, BuildError> {
        Entity::builder()
            .with_health(self.health)
            .with_damage(self.damage)
            .with_kind(self.kind)
            .build()
    }
}

/// The two combatants of a duel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelConfig {
    pub first: EntitySpec,
    pub second: EntitySpec,
}

impl DuelConfig {
    // ===== scenario defaults =====
    pub const DEFAULT_FIRST: EntitySpec = EntitySpec::new(100, 40, EntityKind::Goblin);
    pub const DEFAULT_SECOND: EntitySpec = EntitySpec::new(200, 10, EntityKind::Sentinel);

    pub fn new() -> Self {
        Self {
            first: Self::DEFAULT_FIRST,
            second: Self::DEFAULT_SECOND,
        }
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self::new()
    }
}

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::combat::{CombatError, Combatant, StrikeReport};

use super::{EntityBuilder, EntityKind};

#[derive(Debug)]
struct EntityData {
    health: i32,
    damage: i32,
    kind: EntityKind,
    opponent: Option<Weak<RefCell<EntityData>>>,
}

/// Shared handle onto one combatant's mutable state.
///
/// Cloning an `Entity` aliases the same state: a strike landed through one
/// handle (or through a [`LoggingCombatant`](crate::LoggingCombatant) wrapping
/// it) is immediately visible through every other clone. The opponent link is
/// weak, so two linked entities are freed once the last strong handles go.
#[derive(Clone)]
pub struct Entity {
    inner: Rc<RefCell<EntityData>>,
}

impl Entity {
    /// Start configuring a new entity.
    pub fn builder() -> EntityBuilder {
        EntityBuilder::new()
    }

    pub(super) fn from_parts(health: i32, damage: i32, kind: EntityKind) -> Self {
        Self {
            inner: Rc::new(RefCell::new(EntityData {
                health,
                damage,
                kind,
                opponent: None,
            })),
        }
    }

    /// Returns true if both handles point at the same entity.
    pub fn same_as(&self, other: &Entity) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Combatant for Entity {
    fn handle(&self) -> Entity {
        self.clone()
    }

    fn health(&self) -> i32 {
        self.inner.borrow().health
    }

    fn set_health(&self, health: i32) {
        self.inner.borrow_mut().health = health;
    }

    fn damage(&self) -> i32 {
        self.inner.borrow().damage
    }

    fn set_damage(&self, damage: i32) {
        self.inner.borrow_mut().damage = damage;
    }

    fn kind(&self) -> EntityKind {
        self.inner.borrow().kind
    }

    fn set_kind(&self, kind: EntityKind) {
        self.inner.borrow_mut().kind = kind;
    }

    /// Returns `None` when no opponent was linked or the opponent was dropped.
    fn opponent(&self) -> Option<Entity> {
        self.inner
            .borrow()
            .opponent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|inner| Entity { inner })
    }

    fn set_opponent(&self, opponent: &Entity) {
        self.inner.borrow_mut().opponent = Some(Rc::downgrade(&opponent.inner));
    }

    /// Subtract this entity's damage from the opponent's health.
    ///
    /// Health is not floored at zero. Without an opponent this does nothing
    /// and returns `Ok(None)`.
    fn strike(&self) -> Result<Option<StrikeReport>, CombatError> {
        let Some(defender) = self.opponent() else {
            return Ok(None);
        };

        // Each accessor releases its borrow before the next one, so a
        // self-linked entity does not trip the RefCell.
        let damage = self.damage();
        let defender_health = defender.health().saturating_sub(damage);
        defender.set_health(defender_health);

        Ok(Some(StrikeReport {
            attacker: self.kind(),
            defender: defender.kind(),
            damage,
            defender_health,
        }))
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Entity")
            .field("health", &data.health)
            .field("damage", &data.damage)
            .field("kind", &data.kind)
            .field("linked", &data.opponent.is_some())
            .finish()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        write!(
            f,
            "{} {{ health: {}, damage: {} }}",
            data.kind, data.health, data.damage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(health: i32, damage: i32, kind: EntityKind) -> Entity {
        Entity::from_parts(health, damage, kind)
    }

    #[test]
    fn strike_without_opponent_is_noop() {
        let lone = entity(50, 5, EntityKind::Warrior);

        assert!(matches!(lone.strike(), Ok(None)));
        assert_eq!(lone.health(), 50);
    }

    #[test]
    fn strike_reduces_opponent_below_zero() {
        let attacker = entity(10, 30, EntityKind::Goblin);
        let defender = entity(20, 0, EntityKind::Sentinel);
        attacker.set_opponent(&defender);

        let report = attacker.strike().unwrap().unwrap();

        assert_eq!(defender.health(), -10);
        assert_eq!(report.defender_health, -10);
        assert_eq!(report.damage, 30);
        assert_eq!(attacker.health(), 10);
    }

    #[test]
    fn clones_alias_the_same_state() {
        let original = entity(10, 1, EntityKind::Warrior);
        let alias = original.clone();

        alias.set_health(3);
        alias.set_kind(EntityKind::Goblin);

        assert_eq!(original.health(), 3);
        assert_eq!(original.kind(), EntityKind::Goblin);
        assert!(original.same_as(&alias));
        assert!(!original.same_as(&entity(10, 1, EntityKind::Warrior)));
    }

    #[test]
    fn self_link_strikes_without_panicking() {
        let fool = entity(10, 4, EntityKind::Goblin);
        fool.set_opponent(&fool);

        fool.strike().unwrap();

        assert_eq!(fool.health(), 6);
    }

    #[test]
    fn dropped_opponent_unlinks() {
        let attacker = entity(10, 4, EntityKind::Goblin);
        {
            let defender = entity(10, 4, EntityKind::Sentinel);
            attacker.set_opponent(&defender);
            assert!(attacker.opponent().is_some());
        }

        assert!(attacker.opponent().is_none());
        assert!(matches!(attacker.strike(), Ok(None)));
    }

    #[test]
    fn setters_do_not_clamp() {
        let target = entity(0, 0, EntityKind::Sentinel);

        target.set_health(-7);
        target.set_damage(-3);

        assert_eq!(target.health(), -7);
        assert_eq!(target.damage(), -3);
    }
}

//! Two-entity battle sessions with snapshot and restore.
//!
//! A [`Session`] holds handles to exactly two entities. Once the battle is
//! started each entity's opponent is the other. [`Session::save`] copies both
//! entities into a [`SessionSnapshot`], which a [`SnapshotHistory`] keeps in
//! insertion order until [`Session::restore`] writes it back.
mod error;
mod history;
mod snapshot;

pub use error::{SessionError, Slot};
pub use history::SnapshotHistory;
pub use snapshot::{EntitySnapshot, SessionSnapshot};

use std::fmt;

use crate::combat::Combatant;
use crate::entity::Entity;

/// Pairing of two entities for one battle.
#[derive(Debug, Default)]
pub struct Session {
    first: Option<Entity>,
    second: Option<Entity>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `combatant` in the first slot, replacing any previous occupant.
    pub fn set_first(&mut self, combatant: &impl Combatant) {
        self.first = Some(combatant.handle());
    }

    /// Put `combatant` in the second slot, replacing any previous occupant.
    pub fn set_second(&mut self, combatant: &impl Combatant) {
        self.second = Some(combatant.handle());
    }

    pub fn first(&self) -> Option<&Entity> {
        self.first.as_ref()
    }

    pub fn second(&self) -> Option<&Entity> {
        self.second.as_ref()
    }

    /// Link both entities as each other's opponent.
    ///
    /// Calling this again with the same pair changes nothing.
    ///
    /// # Errors
    ///
    /// [`SessionError::MissingEntity`] if either slot is empty; no link is
    /// made in that case.
    pub fn start_battle(&self) -> Result<(), SessionError> {
        let (first, second) = self.pair()?;

        first.set_opponent(second);
        second.set_opponent(first);

        tracing::debug!(first = %first.kind(), second = %second.kind(), "battle started");
        Ok(())
    }

    /// Copy health, damage and kind of both entities.
    pub fn save(&self) -> Result<SessionSnapshot, SessionError> {
        let (first, second) = self.pair()?;

        let snapshot = SessionSnapshot {
            first: EntitySnapshot::capture(first),
            second: EntitySnapshot::capture(second),
        };

        tracing::debug!(?snapshot, "saved session");
        Ok(snapshot)
    }

    /// Overwrite both entities from `snapshot`.
    ///
    /// `None` (for example an empty history's [`SnapshotHistory::last`]) is a
    /// no-op. Opponent links are left as they are.
    pub fn restore(&self, snapshot: Option<&SessionSnapshot>) -> Result<(), SessionError> {
        let Some(snapshot) = snapshot else {
            tracing::warn!("restore requested without a snapshot; keeping current state");
            return Ok(());
        };

        let (first, second) = self.pair()?;
        snapshot.first.apply_to(first);
        snapshot.second.apply_to(second);

        tracing::debug!(?snapshot, "restored session");
        Ok(())
    }

    fn pair(&self) -> Result<(&Entity, &Entity), SessionError> {
        let first = self
            .first
            .as_ref()
            .ok_or(SessionError::MissingEntity { slot: Slot::First })?;
        let second = self
            .second
            .as_ref()
            .ok_or(SessionError::MissingEntity { slot: Slot::Second })?;
        Ok((first, second))
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot(entity: Option<&Entity>) -> String {
            entity.map_or_else(|| "<empty>".to_string(), Entity::to_string)
        }

        write!(
            f,
            "Session {{ first: {}, second: {} }}",
            slot(self.first()),
            slot(self.second())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;

    fn entity(health: i32, damage: i32, kind: EntityKind) -> Entity {
        Entity::builder()
            .with_health(health)
            .with_damage(damage)
            .with_kind(kind)
            .build()
            .unwrap()
    }

    fn paired() -> (Session, Entity, Entity) {
        let first = entity(100, 40, EntityKind::Goblin);
        let second = entity(200, 10, EntityKind::Sentinel);
        let mut session = Session::new();
        session.set_first(&first);
        session.set_second(&second);
        (session, first, second)
    }

    #[test]
    fn start_battle_links_symmetrically() {
        let (session, first, second) = paired();

        session.start_battle().unwrap();

        assert!(first.opponent().unwrap().same_as(&second));
        assert!(second.opponent().unwrap().same_as(&first));
    }

    #[test]
    fn start_battle_twice_keeps_links() {
        let (session, first, second) = paired();

        session.start_battle().unwrap();
        session.start_battle().unwrap();

        assert!(first.opponent().unwrap().same_as(&second));
        assert!(second.opponent().unwrap().same_as(&first));
    }

    #[test]
    fn start_battle_requires_both_slots() {
        let mut session = Session::new();
        assert_eq!(
            session.start_battle(),
            Err(SessionError::MissingEntity { slot: Slot::First })
        );

        let lone = entity(1, 1, EntityKind::Warrior);
        session.set_first(&lone);
        assert_eq!(
            session.start_battle(),
            Err(SessionError::MissingEntity { slot: Slot::Second })
        );
        assert!(lone.opponent().is_none());
    }

    #[test]
    fn setting_a_slot_twice_replaces_it() {
        let (mut session, first, _) = paired();
        let replacement = entity(7, 7, EntityKind::Warrior);

        session.set_first(&replacement);

        assert!(session.first().unwrap().same_as(&replacement));
        assert!(!session.first().unwrap().same_as(&first));
    }

    #[test]
    fn restore_none_is_noop() {
        let session = Session::new();
        assert_eq!(session.restore(None), Ok(()));

        let (session, first, _) = paired();
        first.set_health(1);
        session.restore(None).unwrap();
        assert_eq!(first.health(), 1);
    }

    #[test]
    fn restore_keeps_opponent_links() {
        let (session, first, second) = paired();
        session.start_battle().unwrap();
        let saved = session.save().unwrap();

        first.strike().unwrap();
        session.restore(Some(&saved)).unwrap();

        assert_eq!(second.health(), 200);
        assert!(first.opponent().unwrap().same_as(&second));
    }

    #[test]
    fn save_requires_both_slots() {
        assert_eq!(
            Session::new().save(),
            Err(SessionError::MissingEntity { slot: Slot::First })
        );
    }

    #[test]
    fn save_reports_empty_second_slot() {
        let mut session = Session::new();
        session.set_first(&entity(1, 1, EntityKind::Warrior));

        assert_eq!(
            session.save(),
            Err(SessionError::MissingEntity { slot: Slot::Second })
        );
    }

    #[test]
    fn restore_some_requires_both_slots() {
        let (session, _, _) = paired();
        let saved = session.save().unwrap();

        let lone = entity(5, 5, EntityKind::Warrior);
        let mut half = Session::new();
        half.set_second(&lone);

        assert_eq!(
            half.restore(Some(&saved)),
            Err(SessionError::MissingEntity { slot: Slot::First })
        );
        assert_eq!(lone.health(), 5);
        assert_eq!(lone.kind(), EntityKind::Warrior);
    }

    #[test]
    fn display_lists_both_slots() {
        let (session, _, _) = paired();
        assert_eq!(
            session.to_string(),
            "Session { first: Goblin { health: 100, damage: 40 }, \
             second: Sentinel { health: 200, damage: 10 } }"
        );
        assert_eq!(
            Session::new().to_string(),
            "Session { first: <empty>, second: <empty> }"
        );
    }
}

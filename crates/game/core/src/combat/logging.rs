use std::cell::RefCell;
use std::fmt;
use std::io::Write;

use crate::entity::{Entity, EntityKind};

use super::{CombatError, Combatant, StrikeReport};

/// Decorator that prints one line for every strike of the wrapped combatant.
///
/// The wrapper owns no combat state: every accessor forwards to the wrapped
/// combatant, which in turn points at shared entity state. Only the output
/// sink lives here.
pub struct LoggingCombatant<C = Entity> {
    inner: C,
    out: RefCell<Box<dyn Write>>,
}

impl<C: Combatant> LoggingCombatant<C> {
    /// Wrap `inner`, writing strike lines to `out`.
    pub fn with_writer(inner: C, out: impl Write + 'static) -> Self {
        Self {
            inner,
            out: RefCell::new(Box::new(out)),
        }
    }
}

impl<C: Combatant> Combatant for LoggingCombatant<C> {
    fn handle(&self) -> Entity {
        self.inner.handle()
    }

    fn health(&self) -> i32 {
        self.inner.health()
    }

    fn set_health(&self, health: i32) {
        self.inner.set_health(health);
    }

    fn damage(&self) -> i32 {
        self.inner.damage()
    }

    fn set_damage(&self, damage: i32) {
        self.inner.set_damage(damage);
    }

    fn kind(&self) -> EntityKind {
        self.inner.kind()
    }

    fn set_kind(&self, kind: EntityKind) {
        self.inner.set_kind(kind);
    }

    fn opponent(&self) -> Option<Entity> {
        self.inner.opponent()
    }

    fn set_opponent(&self, opponent: &Entity) {
        self.inner.set_opponent(opponent);
    }

    /// Strike through the wrapped combatant, then write the outcome.
    ///
    /// # Errors
    ///
    /// - [`CombatError::MissingOpponent`] if the wrapped combatant has no
    ///   opponent; nothing is written.
    /// - [`CombatError::Output`] if the line could not be written. The strike
    ///   itself has already landed.
    fn strike(&self) -> Result<Option<StrikeReport>, CombatError> {
        let Some(report) = self.inner.strike()? else {
            return Err(CombatError::MissingOpponent {
                attacker: self.inner.kind(),
            });
        };

        tracing::info!(
            attacker = %report.attacker,
            defender = %report.defender,
            damage = report.damage,
            defender_health = report.defender_health,
            "strike landed"
        );

        let mut out = self.out.borrow_mut();
        writeln!(out, "{report}")?;
        out.flush()?;

        Ok(Some(report))
    }
}

impl<C: fmt::Debug> fmt::Debug for LoggingCombatant<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingCombatant")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<C: fmt::Display> fmt::Display for LoggingCombatant<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

//! Strike errors.

use crate::entity::EntityKind;
use crate::error::{DuelError, ErrorSeverity};

/// Errors that can occur while striking through a wrapper.
#[derive(Debug, thiserror::Error)]
pub enum CombatError {
    /// The attacker was asked to strike before any opponent was linked.
    #[error("{attacker} has no opponent to strike; start the battle first")]
    MissingOpponent {
        /// Kind of the entity that tried to strike.
        attacker: EntityKind,
    },

    /// The strike landed but its log line could not be written.
    #[error("failed to write strike line")]
    Output(#[from] std::io::Error),
}

impl DuelError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingOpponent { .. } => ErrorSeverity::Internal,
            Self::Output(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingOpponent { .. } => "COMBAT_MISSING_OPPONENT",
            Self::Output(_) => "COMBAT_OUTPUT",
        }
    }
}

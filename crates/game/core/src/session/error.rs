//! Session errors.

use strum::Display;

use crate::error::{DuelError, ErrorSeverity};

/// One of the two session slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Slot {
    First,
    Second,
}

/// Errors raised by [`Session`](super::Session) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// An operation needed both entities but a slot was never filled.
    #[error("session slot `{slot}` has no entity")]
    MissingEntity {
        /// The empty slot.
        slot: Slot,
    },
}

impl DuelError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingEntity { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingEntity { .. } => "SESSION_MISSING_ENTITY",
        }
    }
}

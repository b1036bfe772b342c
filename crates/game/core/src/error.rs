//! Common error infrastructure for duel-core.
//!
//! Domain-specific errors (`BuildError`, `CombatError`, `SessionError`) live
//! beside the operations that raise them. This module holds the shared
//! severity classification they all report through [`DuelError`].

/// Severity level of an error, used for categorization and handling.
///
/// - **Recoverable**: the call may succeed if retried (e.g. a full output pipe)
/// - **Validation**: invalid input, should not retry without changes
/// - **Internal**: setup bug in the caller, the duel cannot proceed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry.
    ///
    /// Examples: writing a strike line failed
    Recoverable,

    /// Validation error - invalid input.
    ///
    /// Examples: building an entity with a field left unset
    Validation,

    /// Internal error - the caller wired things up wrong.
    ///
    /// Examples: striking through the logger before the battle started,
    /// starting a battle with an empty slot
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a setup bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all duel-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait DuelError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

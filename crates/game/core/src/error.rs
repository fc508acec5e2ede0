//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (e.g. [`CharacterError`](crate::CharacterError),
//! [`BattleError`](crate::BattleError)) live next to the operations they
//! guard. This module provides the shared classification every error reports
//! so callers can pick a recovery strategy without matching on each variant.
//!
//! Running out of mana is not an error: a failed cast is a game outcome
//! ([`SpellEffect::InsufficientMana`](crate::SpellEffect)).

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: bad player input; re-prompt and carry on
/// - **Validation**: a well-formed request the current state cannot accept
/// - **Internal**: an invariant was broken; indicates a bug
/// - **Fatal**: the caller handed the engine something it must never receive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with different input.
    ///
    /// Examples: non-numeric menu choice, out-of-range option
    Recoverable,

    /// Validation error - rejected without retrying the same request.
    ///
    /// Examples: command submitted after the battle ended
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: negative health after a turn
    Internal,

    /// Fatal error - integration mistake, cannot continue.
    ///
    /// Examples: character constructed without a name
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or integration mistake.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

impl core::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all arena errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by recoverability, not by impact
/// - Keep `error_code` stable; logs and tests match on it
pub trait ArenaError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Fatal.to_string(), "fatal");
    }
}

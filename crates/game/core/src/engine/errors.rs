//! Error types for battle execution.

use crate::error::{ArenaError, ErrorSeverity};

use super::turns::Side;

/// Errors surfaced while executing a command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("battle is already over: {winner} won")]
    Finished { winner: Side },

    #[error("invariant violated for {name}: {detail}")]
    InvariantViolated { name: String, detail: String },
}

impl ArenaError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BattleError::Finished { .. } => ErrorSeverity::Validation,
            BattleError::InvariantViolated { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BattleError::Finished { .. } => "BATTLE_FINISHED",
            BattleError::InvariantViolated { .. } => "BATTLE_INVARIANT_VIOLATED",
        }
    }
}

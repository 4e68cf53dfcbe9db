//! Error taxonomy for the game engine.
//!
//! Three classes with very different handling expectations:
//!
//! - [`EngineError::InvalidMove`]: the caller asked for something illegal
//!   (acting on a finished match, querying a robot choice on a human turn).
//!   Recoverable; the operation is rejected with no state change.
//! - [`EngineError::EmptyHand`]: a hand was empty where a visible card was
//!   required. Unreachable when round bookkeeping is correct.
//! - [`EngineError::InvariantViolation`]: the conserved-card check failed
//!   after a round. The match state is corrupt.
//!
//! The last two indicate a bug in the engine, not bad input: callers must
//! abandon the match and surface the diagnostic instead of playing on.

use thiserror::Error;

/// Errors produced by the game engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The caller requested an illegal operation. No state was changed.
    #[error("invalid move: {reason}")]
    InvalidMove { reason: String },

    /// A player's hand was empty where a card was required.
    #[error("{player} has no cards to expose")]
    EmptyHand { player: String },

    /// The card-conservation check failed after a round.
    #[error("card invariant violated: {detail}")]
    InvariantViolation { detail: String },
}

impl EngineError {
    /// Whether the match can continue after this error.
    ///
    /// Only `InvalidMove` is recoverable; the other classes mean the match
    /// state can no longer be trusted.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::InvalidMove { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        let invalid = EngineError::InvalidMove {
            reason: "match is finished".to_string(),
        };
        assert!(invalid.is_recoverable());

        let empty = EngineError::EmptyHand {
            player: "Robot".to_string(),
        };
        assert!(!empty.is_recoverable());

        let corrupt = EngineError::InvariantViolation {
            detail: "card count changed".to_string(),
        };
        assert!(!corrupt.is_recoverable());
    }

    #[test]
    fn test_display() {
        let err = EngineError::EmptyHand {
            player: "Player 2".to_string(),
        };
        assert_eq!(format!("{}", err), "Player 2 has no cards to expose");
    }
}

//! Domain-level error type used by the rules engine and game flow.
//!
//! Every rejected command maps to one of these. Rejections are local: the
//! transition that produced the error has not touched the match state.

use thiserror::Error;

/// What kind of rule a rejected command broke.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Card is not in the acting player's legal-move set.
    IllegalMove,
    /// Actor is not the active seat.
    OutOfTurn,
    /// Bid outside [1, 7] or a second bid from the same seat.
    InvalidBid,
    /// Command not accepted in the current phase.
    InvalidState,
    /// Card token could not be parsed.
    ParseCard,
    /// Roster name empty or otherwise unusable.
    InvalidName,
    /// Deal asked for a number of hands the deck cannot be split into.
    InvalidPlayerCount,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or game rule violation
    #[error("{kind:?}: {detail}")]
    Validation { kind: ValidationKind, detail: String },
    /// Internal state no longer satisfies an engine invariant (a bug)
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn illegal_move(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::IllegalMove, detail)
    }

    pub fn out_of_turn(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::OutOfTurn, detail)
    }

    pub fn invalid_bid(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::InvalidBid, detail)
    }

    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::InvalidState, detail)
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// Validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation { kind, .. } => Some(kind),
            DomainError::Invariant(_) => None,
        }
    }
}

//! AI player trait definition.

use thiserror::Error;

use crate::domain::player_view::RoundView;
use crate::domain::Card;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI produced (or could only produce) an invalid move
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// Trait for AI players.
///
/// Implementations receive what one seat can see and must choose a legal
/// action. Legal options come from `RoundView::legal_bids` and
/// `RoundView::legal_plays`; never choose from the raw hand.
pub trait AiPlayer: Send + Sync {
    /// Choose a bid value in 1..=7.
    fn choose_bid(&self, state: &RoundView) -> Result<u8, AiError>;

    /// Choose a card to play.
    fn choose_play(&self, state: &RoundView) -> Result<Card, AiError>;
}

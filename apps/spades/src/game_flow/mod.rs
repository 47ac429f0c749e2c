//! Game flow - drives a `MatchState` through its phases.
//!
//! The domain functions enforce the rules; this layer decides who supplies the
//! next decision (engine, computer seat or human), runs computer seats, and
//! reports what happened so a collaborator can render it.

mod ai_coordinator;
mod orchestration;
mod player_actions;

use serde::Serialize;

use crate::ai::AiConfig;
use crate::domain::game_transition::GameTransition;
use crate::domain::lifecycle::MatchOutcome;
use crate::domain::state::{Phase, PlayerId};
use crate::domain::{Card, RoundSummary};

pub use ai_coordinator::AiFailureMode;

/// Game flow service: stateless apart from its AI policy.
#[derive(Debug, Clone, Default)]
pub struct GameFlowService {
    pub ai_failure_mode: AiFailureMode,
    /// Base config handed to every computer seat; each decision gets its own seed.
    pub ai_config: AiConfig,
}

impl GameFlowService {
    pub fn new(ai_failure_mode: AiFailureMode) -> Self {
        Self {
            ai_failure_mode,
            ai_config: AiConfig::default(),
        }
    }

    pub fn with_ai_config(mut self, ai_config: AiConfig) -> Self {
        self.ai_config = ai_config;
        self
    }
}

/// What the table is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextStep {
    /// A lifecycle command is needed: open or confirm names, start a match,
    /// or acknowledge a finished one.
    Lifecycle,
    /// The engine can move on by itself (deal shown, trick cleared, round rolled over).
    Internal,
    /// A computer seat must decide; `advance_ai` resolves it.
    Ai { seat: PlayerId },
    /// Blocked on the human at `seat`.
    Human { seat: PlayerId },
}

/// One applied step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StepEvent {
    DealCompleted {
        first_bidder: PlayerId,
    },
    BidPlaced {
        seat: PlayerId,
        bid: u8,
    },
    CardPlayed {
        seat: PlayerId,
        card: Card,
        trick_winner: Option<PlayerId>,
    },
    TrickCleared {
        winner: PlayerId,
        next: Phase,
        #[serde(skip_serializing_if = "Option::is_none")]
        round_summary: Option<RoundSummary>,
    },
    RoundStarted {
        round_no: u16,
        dealer: PlayerId,
    },
    MatchOver {
        outcome: MatchOutcome,
    },
}

/// A step plus the edge-triggered transitions it caused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowStep {
    pub event: StepEvent,
    pub transitions: Vec<GameTransition>,
}

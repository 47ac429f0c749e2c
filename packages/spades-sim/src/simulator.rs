//! In-memory match runner for computer-only tables.

use spades::domain::lifecycle::match_outcome;
use spades::domain::rules::{PLAYERS, TEAMS};
use spades::domain::RoundSummary;
use spades::game_flow::StepEvent;
use spades::{
    AiConfig, AiFailureMode, AppError, GameFlowService, MatchOutcome, MatchState, Phase, PlayerId,
    SeatSpec,
};
use tracing::{debug, warn};

use crate::types::AiType;

/// One scored round, captured as the last trick was cleared.
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub round_no: u16,
    pub dealer: PlayerId,
    pub bids: [Option<u8>; PLAYERS],
    pub tricks_won: [u8; PLAYERS],
    pub summary: RoundSummary,
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub seed: u64,
    /// None when the match hit the round cap before anyone reached the target.
    pub outcome: Option<MatchOutcome>,
    pub final_scores: [i32; TEAMS],
    pub rounds: Vec<RoundRecord>,
}

impl MatchResult {
    pub fn capped(&self) -> bool {
        self.outcome.is_none()
    }
}

pub struct Simulator {
    service: GameFlowService,
    max_rounds: u16,
}

impl Simulator {
    pub fn new(max_rounds: u16) -> Self {
        Self {
            service: GameFlowService::new(AiFailureMode::Strict),
            max_rounds,
        }
    }

    /// Base AI config for every computer seat.
    pub fn with_ai_config(mut self, ai_config: AiConfig) -> Self {
        self.service = self.service.with_ai_config(ai_config);
        self
    }

    pub fn simulate_match(
        &self,
        seed: u64,
        seats: [AiType; PLAYERS],
    ) -> Result<MatchResult, AppError> {
        let specs: [SeatSpec; PLAYERS] = std::array::from_fn(|seat| {
            let ai = seats[seat];
            SeatSpec::ai(format!("{}-{seat}", ai.name()), ai.kind())
        });
        let mut state = MatchState::new();
        self.service.start_match(&mut state, specs, seed)?;

        let mut rounds = Vec::new();
        while state.phase != Phase::GameOver {
            if state.round_no > self.max_rounds {
                warn!(seed, max_rounds = self.max_rounds, "Round cap reached");
                break;
            }
            let step = self.service.advance(&mut state)?;
            if let StepEvent::TrickCleared {
                round_summary: Some(summary),
                ..
            } = step.event
            {
                rounds.push(RoundRecord {
                    round_no: summary.round_no,
                    dealer: state.dealer,
                    bids: state.bids(),
                    tricks_won: state.tricks_won(),
                    summary,
                });
            }
        }

        let outcome = match_outcome(&state);
        debug!(seed, rounds = rounds.len(), ?outcome, "Match simulated");
        Ok(MatchResult {
            seed,
            outcome,
            final_scores: state.teams.map(|t| t.score),
            rounds,
        })
    }
}

use tracing::{debug, warn};

use super::{FlowStep, GameFlowService, NextStep, StepEvent};
use crate::ai::{create_ai, AiError, AiPlayer, RandomPlayer};
use crate::domain::bidding::place_bid;
use crate::domain::game_transition::LifecycleView;
use crate::domain::player_view::RoundView;
use crate::domain::state::{MatchState, Phase, PlayerId};
use crate::domain::tricks::play_card;
use crate::domain::{derive_ai_seed, PlayerController};
use crate::error::AppError;
use crate::errors::domain::DomainError;

/// How to handle a computer seat that errors or picks an illegal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiFailureMode {
    /// Surface the error (tests, simulations).
    #[default]
    Strict,
    /// Log and substitute a seeded random legal move.
    FallbackRandom,
}

/// Type of decision a seat owes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionType {
    Bid,
    Play,
}

impl GameFlowService {
    /// What the table is waiting on right now.
    pub fn next_step(&self, state: &MatchState) -> NextStep {
        match state.phase {
            Phase::Menu | Phase::NameSelect | Phase::GameOver => NextStep::Lifecycle,
            Phase::Dealing | Phase::TrickEnd | Phase::RoundEnd => NextStep::Internal,
            Phase::Bidding | Phase::Playing => {
                let Some(seat) = state.turn else {
                    return NextStep::Lifecycle;
                };
                match state.players.get(seat as usize).map(|p| p.controller) {
                    Some(PlayerController::Human) => NextStep::Human { seat },
                    Some(PlayerController::Ai(_)) => NextStep::Ai { seat },
                    None => NextStep::Lifecycle,
                }
            }
        }
    }

    /// Seat whose human input the engine is blocked on, if any.
    pub fn awaiting_human(&self, state: &MatchState) -> Option<PlayerId> {
        match self.next_step(state) {
            NextStep::Human { seat } => Some(seat),
            _ => None,
        }
    }

    /// Resolve the pending computer bid or play.
    pub fn advance_ai(&self, state: &mut MatchState) -> Result<FlowStep, AppError> {
        let NextStep::Ai { seat } = self.next_step(state) else {
            return Err(DomainError::invalid_state(format!(
                "no computer decision pending during {:?}",
                state.phase
            ))
            .into());
        };
        let action = match state.phase {
            Phase::Bidding => ActionType::Bid,
            _ => ActionType::Play,
        };
        let PlayerController::Ai(kind) = state.player(seat)?.controller else {
            return Err(
                DomainError::invariant(format!("seat {seat} is not computer-controlled")).into(),
            );
        };

        let base_seed = self.ai_config.seed().unwrap_or(state.seed);
        let seed = derive_ai_seed(base_seed, state.round_no, seat, state.decisions_taken());
        let ai = create_ai(kind, &self.ai_config.for_decision(seed));
        let view = RoundView::for_seat(state, seat)?;

        let before = LifecycleView::of(state);
        let event = match self.apply_ai_action(state, seat, action, ai.as_ref(), &view) {
            Ok(event) => event,
            Err(err) if self.ai_failure_mode == AiFailureMode::FallbackRandom => {
                warn!(seat, ?kind, error = %err, "AI failed, falling back to random move");
                let fallback = RandomPlayer::new(Some(seed));
                self.apply_ai_action(state, seat, action, &fallback, &view)?
            }
            Err(err) => {
                warn!(seat, ?kind, error = %err, "AI failed");
                return Err(err);
            }
        };
        Ok(self.finish_step(&before, state, event))
    }

    fn apply_ai_action(
        &self,
        state: &mut MatchState,
        seat: PlayerId,
        action: ActionType,
        ai: &dyn AiPlayer,
        view: &RoundView,
    ) -> Result<StepEvent, AppError> {
        match action {
            ActionType::Bid => {
                let bid = ai.choose_bid(view)?;
                debug!(seat, bid, "AI bid");
                place_bid(state, seat, bid).map_err(|e| illegal_ai_move(seat, e))?;
                Ok(StepEvent::BidPlaced { seat, bid })
            }
            ActionType::Play => {
                let card = ai.choose_play(view)?;
                debug!(seat, %card, "AI play");
                let result = play_card(state, seat, card).map_err(|e| illegal_ai_move(seat, e))?;
                Ok(StepEvent::CardPlayed {
                    seat,
                    card,
                    trick_winner: result.trick_winner,
                })
            }
        }
    }
}

fn illegal_ai_move(seat: PlayerId, err: DomainError) -> AppError {
    AiError::InvalidMove(format!("seat {seat}: {err}")).into()
}

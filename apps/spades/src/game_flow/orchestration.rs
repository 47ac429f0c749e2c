use rand::Rng;
use tracing::{debug, info};

use super::{FlowStep, GameFlowService, NextStep, StepEvent};
use crate::domain::game_transition::{derive_game_transitions, LifecycleView};
use crate::domain::lifecycle::{
    acknowledge_game_over, complete_deal, conclude_round, confirm_names, match_outcome,
    open_name_select, start_match, SeatSpec,
};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{MatchState, Phase};
use crate::domain::tricks::finish_trick;
use crate::domain::{AiKind, MatchOutcome};
use crate::error::AppError;
use crate::errors::domain::DomainError;

impl GameFlowService {
    /// Apply exactly one engine-side step: an internal transition or a computer decision.
    ///
    /// Fails with `InvalidState` when the table is waiting on a human or a lifecycle command.
    pub fn advance(&self, state: &mut MatchState) -> Result<FlowStep, AppError> {
        match self.next_step(state) {
            NextStep::Internal => self.advance_internal(state),
            NextStep::Ai { .. } => self.advance_ai(state),
            NextStep::Human { seat } => Err(DomainError::invalid_state(format!(
                "waiting on human input from seat {seat}"
            ))
            .into()),
            NextStep::Lifecycle => Err(DomainError::invalid_state(format!(
                "waiting on a lifecycle command during {:?}",
                state.phase
            ))
            .into()),
        }
    }

    /// Advance until a human must act or a lifecycle command is needed.
    pub fn run_until_blocked(&self, state: &mut MatchState) -> Result<Vec<FlowStep>, AppError> {
        let mut steps = Vec::new();
        while matches!(
            self.next_step(state),
            NextStep::Internal | NextStep::Ai { .. }
        ) {
            steps.push(self.advance(state)?);
        }
        debug!(steps = steps.len(), next = ?self.next_step(state), "Blocked");
        Ok(steps)
    }

    fn advance_internal(&self, state: &mut MatchState) -> Result<FlowStep, AppError> {
        let before = LifecycleView::of(state);
        let event = match state.phase {
            Phase::Dealing => StepEvent::DealCompleted {
                first_bidder: complete_deal(state)?,
            },
            Phase::TrickEnd => {
                let r = finish_trick(state)?;
                StepEvent::TrickCleared {
                    winner: r.winner,
                    next: r.phase,
                    round_summary: r.round_summary,
                }
            }
            Phase::RoundEnd => match conclude_round(state)? {
                Phase::GameOver => {
                    let outcome = match_outcome(state)
                        .ok_or_else(|| DomainError::invariant("GameOver without an outcome"))?;
                    StepEvent::MatchOver { outcome }
                }
                _ => StepEvent::RoundStarted {
                    round_no: state.round_no,
                    dealer: state.dealer,
                },
            },
            other => {
                return Err(DomainError::invalid_state(format!(
                    "no internal step during {other:?}"
                ))
                .into())
            }
        };
        Ok(self.finish_step(&before, state, event))
    }

    /// Open name selection with a freshly sampled roster.
    pub fn open_name_select<R: Rng + ?Sized>(
        &self,
        state: &mut MatchState,
        rng: &mut R,
    ) -> Result<(), DomainError> {
        open_name_select(state, rng)
    }

    /// Confirm the roster and deal the first round.
    pub fn confirm_names(
        &self,
        state: &mut MatchState,
        opponents: AiKind,
        seed: u64,
    ) -> Result<FlowStep, DomainError> {
        let before = LifecycleView::of(state);
        confirm_names(state, opponents, seed)?;
        Ok(self.round_started(&before, state))
    }

    /// Seat four players and deal the first round.
    pub fn start_match(
        &self,
        state: &mut MatchState,
        seats: [SeatSpec; PLAYERS],
        seed: u64,
    ) -> Result<FlowStep, DomainError> {
        let before = LifecycleView::of(state);
        start_match(state, seats, seed)?;
        Ok(self.round_started(&before, state))
    }

    /// Deal the next round from RoundEnd.
    pub fn start_round(&self, state: &mut MatchState) -> Result<FlowStep, DomainError> {
        let before = LifecycleView::of(state);
        crate::domain::lifecycle::start_round(state)?;
        Ok(self.round_started(&before, state))
    }

    /// Return to the menu after a finished match.
    pub fn acknowledge_game_over(&self, state: &mut MatchState) -> Result<MatchOutcome, DomainError> {
        let outcome = acknowledge_game_over(state)?;
        info!(winner = ?outcome.winner, "Game over acknowledged");
        Ok(outcome)
    }

    fn round_started(&self, before: &LifecycleView, state: &MatchState) -> FlowStep {
        let event = StepEvent::RoundStarted {
            round_no: state.round_no,
            dealer: state.dealer,
        };
        self.finish_step(before, state, event)
    }

    pub(super) fn finish_step(
        &self,
        before: &LifecycleView,
        state: &MatchState,
        event: StepEvent,
    ) -> FlowStep {
        let transitions = derive_game_transitions(before, &LifecycleView::of(state));
        if !transitions.is_empty() {
            debug!(?event, ?transitions, "Step applied");
        }
        FlowStep { event, transitions }
    }
}

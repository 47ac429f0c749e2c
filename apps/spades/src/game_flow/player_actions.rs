use tracing::info;

use super::{FlowStep, GameFlowService, StepEvent};
use crate::domain::bidding::place_bid;
use crate::domain::game_transition::LifecycleView;
use crate::domain::state::{MatchState, PlayerId};
use crate::domain::tricks::play_card;
use crate::domain::Card;
use crate::errors::domain::DomainError;

impl GameFlowService {
    /// Human bid. Computer seats are driven by `advance_ai` and cannot be bid for.
    pub fn submit_bid(
        &self,
        state: &mut MatchState,
        seat: PlayerId,
        bid: u8,
    ) -> Result<FlowStep, DomainError> {
        require_human(state, seat)?;
        let before = LifecycleView::of(state);
        place_bid(state, seat, bid)?;
        info!(seat, bid, "Human bid");
        Ok(self.finish_step(&before, state, StepEvent::BidPlaced { seat, bid }))
    }

    /// Human card play.
    pub fn submit_play(
        &self,
        state: &mut MatchState,
        seat: PlayerId,
        card: Card,
    ) -> Result<FlowStep, DomainError> {
        require_human(state, seat)?;
        let before = LifecycleView::of(state);
        let result = play_card(state, seat, card)?;
        info!(seat, %card, "Human play");
        Ok(self.finish_step(
            &before,
            state,
            StepEvent::CardPlayed {
                seat,
                card,
                trick_winner: result.trick_winner,
            },
        ))
    }
}

fn require_human(state: &MatchState, seat: PlayerId) -> Result<(), DomainError> {
    match state.players.get(seat as usize) {
        Some(p) if p.is_human() => Ok(()),
        Some(_) => Err(DomainError::invalid_state(format!(
            "seat {seat} is computer-controlled"
        ))),
        None => Err(DomainError::invalid_state(format!(
            "no player seated at {seat}"
        ))),
    }
}

use tracing::debug;

use crate::domain::rules::{valid_bid_range, PLAYERS};
use crate::domain::state::{
    expected_bidder, require_seated, require_turn, round_start_seat, MatchState, Phase, PlayerId,
};
use crate::errors::domain::DomainError;

/// Result of placing a bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceBidResult {
    pub bid: u8,
    /// Seat that bids next, or the first leader once bidding closed.
    pub next_turn: PlayerId,
    /// Set when the fourth bid moved the round into Playing.
    pub phase_transitioned: Option<Phase>,
}

/// Bids `who` may place right now; empty when it is not their turn to bid.
pub fn legal_bids(state: &MatchState, who: PlayerId) -> Vec<u8> {
    if state.phase != Phase::Bidding || state.turn != Some(who) {
        return Vec::new();
    }
    match state.players.get(who as usize) {
        Some(p) if p.bid.is_none() => valid_bid_range().collect(),
        _ => Vec::new(),
    }
}

/// Record a bid for `who`, enforcing phase, turn, range and bid-once.
pub fn place_bid(
    state: &mut MatchState,
    who: PlayerId,
    bid: u8,
) -> Result<PlaceBidResult, DomainError> {
    if state.phase != Phase::Bidding {
        return Err(DomainError::invalid_state(format!(
            "cannot bid during {:?}",
            state.phase
        )));
    }
    require_seated(state, "place_bid")?;

    if !valid_bid_range().contains(&bid) {
        return Err(DomainError::invalid_bid(format!(
            "bid {bid} outside {}..={}",
            valid_bid_range().start(),
            valid_bid_range().end()
        )));
    }

    let turn = require_turn(state, "place_bid")?;
    if state.player(who)?.bid.is_some() {
        return Err(DomainError::invalid_bid(format!(
            "seat {who} has already bid this round"
        )));
    }
    if turn != who {
        return Err(DomainError::out_of_turn(format!(
            "seat {who} bid during seat {turn}'s turn"
        )));
    }
    debug_assert_eq!(turn, expected_bidder(state.dealer, state.bids_placed()));

    state.players[who as usize].bid = Some(bid);
    debug!(seat = who, bid, "Bid placed");

    if (state.bids_placed() as usize) < PLAYERS {
        let next = expected_bidder(state.dealer, state.bids_placed());
        state.turn = Some(next);
        return Ok(PlaceBidResult {
            bid,
            next_turn: next,
            phase_transitioned: None,
        });
    }

    let leader = round_start_seat(state.dealer);
    state.phase = Phase::Playing;
    state.leader = Some(leader);
    state.turn = Some(leader);
    debug!(leader, bids = ?state.bids(), "Bidding closed, Transition: Bidding -> Playing");

    Ok(PlaceBidResult {
        bid,
        next_turn: leader,
        phase_transitioned: Some(Phase::Playing),
    })
}

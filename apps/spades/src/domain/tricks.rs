use tracing::debug;

use crate::domain::cards_logic::winning_play_index;
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{apply_round_scoring, RoundSummary};
use crate::domain::state::{
    expected_actor, next_player, require_lead, require_leader, require_seated, require_turn,
    CompletedTrick, MatchState, Phase, PlayerId, RoundState,
};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    pub card: Card,
    /// Whether this card was the fourth of the trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<PlayerId>,
    /// Whether this play broke spades.
    pub broke_spades: bool,
    /// Phase transitioned to, if any (None means still in Playing).
    pub phase_transitioned: Option<Phase>,
}

/// Result of clearing a finished trick off the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishTrickResult {
    pub winner: PlayerId,
    /// Playing (winner leads) or RoundEnd.
    pub phase: Phase,
    /// Scoring applied when the round ended.
    pub round_summary: Option<RoundSummary>,
}

/// Compute legal cards the player may play, independent of turn enforcement.
pub fn legal_moves(state: &MatchState, who: PlayerId) -> Vec<Card> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }
    match state.players.get(who as usize) {
        Some(p) => p.legal_moves(state.round.trick_lead, state.round.spades_broken),
        None => Vec::new(),
    }
}

/// Play a card into the current trick, enforcing phase, turn and legality.
///
/// The fourth card resolves the trick, credits the winner and moves to TrickEnd.
pub fn play_card(
    state: &mut MatchState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::invalid_state(format!(
            "cannot play a card during {:?}",
            state.phase
        )));
    }
    require_seated(state, "play_card")?;

    let turn = require_turn(state, "play_card")?;
    if turn != who {
        return Err(DomainError::out_of_turn(format!(
            "seat {who} played during seat {turn}'s turn"
        )));
    }
    let leader = require_leader(state, "play_card")?;
    debug_assert_eq!(
        turn,
        expected_actor(leader, state.round.trick_plays.len() as u8)
    );

    let Some(pos) = state.players[who as usize]
        .hand
        .iter()
        .position(|&c| c == card)
    else {
        return Err(DomainError::illegal_move(format!(
            "{card} is not in seat {who}'s hand"
        )));
    };
    if !legal_moves(state, who).contains(&card) {
        return Err(DomainError::illegal_move(format!(
            "{card} is not a legal play for seat {who}"
        )));
    }

    // On first play, set lead
    if state.round.trick_plays.is_empty() {
        state.round.trick_lead = Some(card.suit);
    }
    let broke_spades = card.is_spade() && !state.round.spades_broken;
    if card.is_spade() {
        state.round.spades_broken = true;
    }

    let removed = state.players[who as usize].hand.remove(pos);
    state.round.trick_plays.push((who, removed));
    debug!(seat = who, card = %removed, broke_spades, "Card played");

    let trick_completed = state.round.trick_plays.len() == PLAYERS;
    let mut result = PlayCardResult {
        card: removed,
        trick_completed,
        trick_winner: None,
        broke_spades,
        phase_transitioned: None,
    };

    if !trick_completed {
        state.turn = Some(next_player(who));
        return Ok(result);
    }

    let winner = resolve_current_trick(&state.round)
        .ok_or_else(|| DomainError::invariant("complete trick must have a winner"))?;
    state.players[winner as usize].tricks_won += 1;
    state.round.trick_winner = Some(winner);
    state.turn = None;
    state.phase = Phase::TrickEnd;
    debug!(winner, plays = ?state.round.trick_plays, "Trick won, Transition: Playing -> TrickEnd");

    result.trick_winner = Some(winner);
    result.phase_transitioned = Some(Phase::TrickEnd);
    Ok(result)
}

/// Resolve the current trick winner if complete.
pub fn resolve_current_trick(round: &RoundState) -> Option<PlayerId> {
    if round.trick_plays.len() < PLAYERS {
        return None;
    }
    let lead = round.trick_lead?;
    winning_play_index(&round.trick_plays, lead).map(|idx| round.trick_plays[idx].0)
}

/// Move the resolved trick off the table.
///
/// The winner leads the next trick; after the last trick the round ends and is scored.
pub fn finish_trick(state: &mut MatchState) -> Result<FinishTrickResult, DomainError> {
    if state.phase != Phase::TrickEnd {
        return Err(DomainError::invalid_state(format!(
            "no finished trick to clear during {:?}",
            state.phase
        )));
    }
    let winner = state
        .round
        .trick_winner
        .ok_or_else(|| DomainError::invariant("trick winner must be set (finish_trick)"))?;
    let lead = require_lead(state, "finish_trick")?;

    let plays = std::mem::take(&mut state.round.trick_plays);
    state.round.completed_tricks.push(CompletedTrick {
        plays,
        lead,
        winner,
    });
    state.round.trick_lead = None;
    state.round.trick_winner = None;

    let hands_empty = state.players.iter().all(|p| p.hand.is_empty());
    if !hands_empty {
        state.phase = Phase::Playing;
        state.leader = Some(winner);
        state.turn = Some(winner);
        return Ok(FinishTrickResult {
            winner,
            phase: Phase::Playing,
            round_summary: None,
        });
    }

    state.phase = Phase::RoundEnd;
    state.leader = None;
    state.turn = None;
    debug!(round = state.round_no, "Transition: TrickEnd -> RoundEnd");
    let summary = apply_round_scoring(state)?;

    Ok(FinishTrickResult {
        winner,
        phase: Phase::RoundEnd,
        round_summary: Some(summary),
    })
}

//! Test-only table state helpers for domain unit tests.

use crate::domain::lifecycle::{complete_deal, start_match, SeatSpec};
use crate::domain::player::{sort_hand, AiKind, Player, PlayerController};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{MatchState, Phase, PlayerId, RoundState};
use crate::domain::Card;

/// Four computer seats named after compass points.
pub fn ai_seats() -> [SeatSpec; PLAYERS] {
    ["South", "West", "North", "East"].map(|n| SeatSpec::ai(n, AiKind::Heuristic))
}

/// A freshly dealt match already in Bidding (dealer 0, seat 1 to bid).
#[allow(clippy::expect_used)]
pub fn bidding_state(seed: u64) -> MatchState {
    let mut state = MatchState::new();
    start_match(&mut state, ai_seats(), seed).expect("start_match on fresh state");
    complete_deal(&mut state).expect("complete_deal after start");
    state
}

/// Arbitrary table state with hand-picked hands, for trick and scoring tests.
///
/// Cards not in any hand are simply absent; conservation checks do not apply.
pub fn make_match_state(
    hands: [Vec<Card>; PLAYERS],
    dealer: PlayerId,
    phase: Phase,
    turn: Option<PlayerId>,
) -> MatchState {
    let players = hands
        .into_iter()
        .enumerate()
        .map(|(seat, mut hand)| {
            sort_hand(&mut hand);
            let mut p = Player::new(
                format!("P{seat}"),
                seat as PlayerId,
                PlayerController::Ai(AiKind::Heuristic),
            );
            p.hand = hand;
            p
        })
        .collect();
    MatchState {
        phase,
        roster: None,
        players,
        teams: Default::default(),
        dealer,
        turn,
        leader: turn,
        round_no: 1,
        seed: 0,
        round: RoundState::empty(),
        last_round: None,
    }
}

/// Playing-phase state where `leader` is about to lead, all bids placed.
pub fn playing_state(hands: [Vec<Card>; PLAYERS], leader: PlayerId) -> MatchState {
    let mut state = make_match_state(hands, (leader + 3) % 4, Phase::Playing, Some(leader));
    for p in &mut state.players {
        p.bid = Some(3);
    }
    state
}

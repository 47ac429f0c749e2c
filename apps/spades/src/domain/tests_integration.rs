//! End-to-end round through the pure domain API.

use crate::domain::bidding::place_bid;
use crate::domain::lifecycle::{complete_deal, conclude_round, start_match};
use crate::domain::rules::{team_of, WINNING_SCORE};
use crate::domain::scoring::TeamScore;
use crate::domain::state::{check_card_conservation, MatchState, Phase};
use crate::domain::test_state_helpers::ai_seats;
use crate::domain::tricks::{finish_trick, legal_moves, play_card};

const SEED: u64 = 0x5EED_0001;

fn expected_team_score(bid: u8, won: u8, before: TeamScore) -> TeamScore {
    if won >= bid {
        let over = won - bid;
        let mut bags = before.bags + over;
        let mut score = before.score + bid as i32 * 10 + over as i32;
        if bags >= 10 {
            score -= 100;
            bags -= 10;
        }
        TeamScore { score, bags }
    } else {
        TeamScore {
            score: before.score - bid as i32 * 10,
            bags: before.bags,
        }
    }
}

#[test]
fn full_round_with_fixed_bids() {
    let mut state = MatchState::new();
    start_match(&mut state, ai_seats(), SEED).unwrap();
    assert_eq!(state.phase, Phase::Dealing);
    assert_eq!(state.dealer, 0);
    check_card_conservation(&state).unwrap();

    complete_deal(&mut state).unwrap();

    // Seat-indexed bids; bidding runs 1, 2, 3, 0.
    let bids = [3u8, 2, 4, 4];
    for seat in [1u8, 2, 3, 0] {
        place_bid(&mut state, seat, bids[seat as usize]).unwrap();
    }
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.turn, Some(1));

    let mut tricks = 0;
    let mut prev_winner = None;
    while state.phase != Phase::RoundEnd {
        match state.phase {
            Phase::Playing => {
                if state.round.trick_plays.is_empty() {
                    // First trick led left of dealer, later ones by the last winner
                    let expected_leader = prev_winner.unwrap_or(1);
                    assert_eq!(state.turn, Some(expected_leader));
                }
                let seat = state.turn.unwrap();
                let card = legal_moves(&state, seat)[0];
                play_card(&mut state, seat, card).unwrap();
            }
            Phase::TrickEnd => {
                let r = finish_trick(&mut state).unwrap();
                prev_winner = Some(r.winner);
                tricks += 1;
                check_card_conservation(&state).unwrap();
            }
            other => panic!("unexpected phase {other:?}"),
        }
    }
    assert_eq!(tricks, 13);

    let won = state.tricks_won();
    assert_eq!(won.iter().map(|&w| w as u32).sum::<u32>(), 13);

    for team in 0..2u8 {
        let team_bid: u8 = (0..4u8).filter(|&s| team_of(s) == team).map(|s| bids[s as usize]).sum();
        let team_won: u8 = (0..4u8).filter(|&s| team_of(s) == team).map(|s| won[s as usize]).sum();
        assert_eq!(
            state.teams[team as usize],
            expected_team_score(team_bid, team_won, TeamScore::default()),
            "team {team}: bid {team_bid}, won {team_won}"
        );
    }
    assert!(state.teams.iter().all(|t| t.score < WINNING_SCORE));

    assert_eq!(conclude_round(&mut state).unwrap(), Phase::Dealing);
    assert_eq!(state.dealer, 1);
    assert_eq!(state.round_no, 2);
    assert!(!state.round.spades_broken);
    assert!(state.players.iter().all(|p| p.bid.is_none() && p.tricks_won == 0));
    assert!(state.players.iter().all(|p| p.hand.len() == 13));

    complete_deal(&mut state).unwrap();
    assert_eq!(state.turn, Some(2));
}

#[test]
fn same_seed_replays_the_same_round() {
    let run = || {
        let mut state = MatchState::new();
        start_match(&mut state, ai_seats(), SEED).unwrap();
        complete_deal(&mut state).unwrap();
        for seat in [1u8, 2, 3, 0] {
            place_bid(&mut state, seat, 3).unwrap();
        }
        while state.phase != Phase::RoundEnd {
            if state.phase == Phase::TrickEnd {
                finish_trick(&mut state).unwrap();
                continue;
            }
            let seat = state.turn.unwrap();
            let card = *legal_moves(&state, seat).last().unwrap();
            play_card(&mut state, seat, card).unwrap();
        }
        state
    };
    assert_eq!(run(), run());
}

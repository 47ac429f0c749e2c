//! Whole-round properties driven by random legal choices.

use proptest::prelude::*;

use crate::domain::bidding::{legal_bids, place_bid};
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::state::{check_card_conservation, MatchState, Phase};
use crate::domain::test_state_helpers::bidding_state;
use crate::domain::tricks::{finish_trick, legal_moves, play_card};
use crate::domain::{test_gens, test_prelude};

/// Play one round to RoundEnd, picking options by the given choice stream.
/// Checks conservation and spade monotonicity after every step.
fn play_round(state: &mut MatchState, choices: &[usize]) -> Result<(), TestCaseError> {
    let mut picks = choices.iter().copied().cycle();
    let mut next_pick = move |n: usize| picks.next().unwrap_or(0) % n;

    while state.phase == Phase::Bidding {
        let seat = state.turn.ok_or_else(|| TestCaseError::fail("no bidder"))?;
        let bids = legal_bids(state, seat);
        prop_assert!(!bids.is_empty());
        let bid = bids[next_pick(bids.len())];
        place_bid(state, seat, bid).map_err(|e| TestCaseError::fail(e.to_string()))?;
    }

    let mut tricks = 0u8;
    let mut broken = false;
    while state.phase != Phase::RoundEnd {
        match state.phase {
            Phase::Playing => {
                let seat = state.turn.ok_or_else(|| TestCaseError::fail("no actor"))?;
                let legal = legal_moves(state, seat);
                prop_assert!(!legal.is_empty());
                let card = legal[next_pick(legal.len())];
                play_card(state, seat, card).map_err(|e| TestCaseError::fail(e.to_string()))?;
            }
            Phase::TrickEnd => {
                finish_trick(state).map_err(|e| TestCaseError::fail(e.to_string()))?;
                tricks += 1;
            }
            other => return Err(TestCaseError::fail(format!("unexpected phase {other:?}"))),
        }
        if broken {
            prop_assert!(state.round.spades_broken, "spades un-broke mid-round");
        }
        broken = state.round.spades_broken;
        if state.phase != Phase::RoundEnd {
            prop_assert!(check_card_conservation(state).is_ok());
        }
    }
    prop_assert_eq!(tricks, TRICKS_PER_ROUND);
    Ok(())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a full round resolves exactly 13 tricks and credits all of them.
    #[test]
    fn prop_round_credits_thirteen_tricks(
        seed in test_gens::seed(),
        choices in prop::collection::vec(any::<usize>(), 1..64),
    ) {
        let mut state = bidding_state(seed);
        play_round(&mut state, &choices)?;

        let won: u8 = state.tricks_won().iter().sum();
        prop_assert_eq!(won, 13);
        prop_assert_eq!(state.round.completed_tricks.len(), 13);
        prop_assert!(state.players.iter().all(|p| p.hand.is_empty()));
        prop_assert!(check_card_conservation(&state).is_ok());
        let summary = state.last_round.clone();
        prop_assert!(summary.is_some());
    }

    /// Property: scores move by exactly the round summary.
    #[test]
    fn prop_scores_follow_summary(
        seed in test_gens::seed(),
        choices in prop::collection::vec(any::<usize>(), 1..64),
    ) {
        let mut state = bidding_state(seed);
        let before = state.teams;
        play_round(&mut state, &choices)?;
        let Some(summary) = state.last_round.clone() else {
            return Err(TestCaseError::fail("round not scored"));
        };
        for t in &summary.teams {
            let idx = t.team as usize;
            prop_assert_eq!(before[idx].score + t.points, state.teams[idx].score);
            prop_assert!(state.teams[idx].bags < 10);
            if !t.made_bid() {
                prop_assert_eq!(t.points, -(t.bid as i32 * 10));
            }
        }
    }
}

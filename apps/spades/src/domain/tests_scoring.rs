use crate::domain::scoring::{apply_round_scoring, score_team, TeamScore};
use crate::domain::state::{MatchState, Phase};
use crate::domain::test_state_helpers::make_match_state;
use crate::errors::domain::ValidationKind;

fn round_end_state(bids: [u8; 4], won: [u8; 4], teams: [TeamScore; 2]) -> MatchState {
    let hands = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    let mut state = make_match_state(hands, 0, Phase::RoundEnd, None);
    for (p, (b, w)) in state.players.iter_mut().zip(bids.into_iter().zip(won)) {
        p.bid = Some(b);
        p.tricks_won = w;
    }
    state.teams = teams;
    state
}

#[test]
fn exact_bid_scores_ten_per_trick() {
    let r = score_team(0, 4, 4, TeamScore::default());
    assert_eq!(r.points, 40);
    assert_eq!(r.bags_earned, 0);
    assert_eq!(r.bags_after, 0);
    assert!(r.made_bid());
}

#[test]
fn overtricks_score_one_point_and_a_bag_each() {
    let r = score_team(0, 4, 6, TeamScore::default());
    assert_eq!(r.points, 42);
    assert_eq!(r.bags_earned, 2);
    assert_eq!(r.bags_after, 2);
    assert_eq!(r.score_after, 42);
}

#[test]
fn failed_bid_loses_ten_per_bid_trick_and_earns_no_bags() {
    let before = TeamScore { score: 100, bags: 5 };
    let r = score_team(1, 4, 3, before);
    assert_eq!(r.points, -40);
    assert_eq!(r.bags_earned, 0);
    assert_eq!(r.bags_after, 5);
    assert_eq!(r.score_after, 60);
    assert!(!r.made_bid());
}

#[test]
fn bag_rollover_keeps_the_remainder() {
    let before = TeamScore { score: 200, bags: 8 };
    let r = score_team(0, 5, 8, before);
    assert_eq!(r.bags_earned, 3);
    assert_eq!(r.penalties, 1);
    assert_eq!(r.bags_after, 1);
    // 50 for the bid, 3 overtricks, one 100-point penalty
    assert_eq!(r.points, 50 + 3 - 100);
    assert_eq!(r.score_after, 153);
}

#[test]
fn landing_exactly_on_the_limit_triggers_the_penalty() {
    let r = score_team(0, 3, 5, TeamScore { score: 0, bags: 8 });
    assert_eq!(r.penalties, 1);
    assert_eq!(r.bags_after, 0);
    assert_eq!(r.points, 30 + 2 - 100);
}

#[test]
fn penalty_applies_each_time_the_limit_is_crossed() {
    // 9 carried + 11 new = 20 bags: two penalties, nothing left over
    let r = score_team(0, 2, 13, TeamScore { score: 0, bags: 9 });
    assert_eq!(r.penalties, 2);
    assert_eq!(r.bags_after, 0);
    assert_eq!(r.points, 20 + 11 - 200);
}

#[test]
fn negative_scores_are_allowed() {
    let r = score_team(1, 7, 0, TeamScore { score: -30, bags: 0 });
    assert_eq!(r.score_after, -100);
}

#[test]
fn apply_round_scoring_sums_partners() {
    // Team 0 = seats 0,2: bid 3+4=7, won 4+4=8 -> +71, 1 bag
    // Team 1 = seats 1,3: bid 2+4=6, won 2+3=5 -> -60
    let mut state = round_end_state([3, 2, 4, 4], [4, 2, 4, 3], Default::default());
    let summary = apply_round_scoring(&mut state).unwrap();
    assert_eq!(summary.teams[0].points, 71);
    assert_eq!(summary.teams[1].points, -60);
    assert_eq!(state.teams[0], TeamScore { score: 71, bags: 1 });
    assert_eq!(state.teams[1], TeamScore { score: -60, bags: 0 });
    assert_eq!(state.last_round, Some(summary));
}

#[test]
fn apply_round_scoring_requires_round_end() {
    let mut state = round_end_state([3, 3, 3, 3], [4, 3, 3, 3], Default::default());
    state.phase = Phase::Playing;
    let err = apply_round_scoring(&mut state).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidState));
}

#[test]
fn apply_round_scoring_rejects_wrong_trick_total() {
    let mut state = round_end_state([3, 3, 3, 3], [3, 3, 3, 3], Default::default());
    let before = state.clone();
    let err = apply_round_scoring(&mut state).unwrap_err();
    assert_eq!(err.kind(), None);
    assert_eq!(state, before);
}

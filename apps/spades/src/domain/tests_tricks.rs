use crate::domain::fixtures::CardFixtures;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::playing_state;
use crate::domain::tricks::{finish_trick, legal_moves, play_card};
use crate::domain::Suit;
use crate::errors::domain::ValidationKind;

fn cards(tokens: &[&str]) -> Vec<crate::domain::Card> {
    CardFixtures::parse_hardcoded(tokens)
}

fn card(token: &str) -> crate::domain::Card {
    cards(&[token])[0]
}

#[test]
fn highest_of_lead_suit_wins_without_trumps() {
    let hands = [
        cards(&["KH", "2C"]),
        cards(&["4H", "3C"]),
        cards(&["AH", "4C"]),
        cards(&["9D", "5C"]),
    ];
    let mut state = playing_state(hands, 1);
    play_card(&mut state, 1, card("4H")).unwrap();
    play_card(&mut state, 2, card("AH")).unwrap();
    play_card(&mut state, 3, card("9D")).unwrap();
    let r = play_card(&mut state, 0, card("KH")).unwrap();
    assert!(r.trick_completed);
    assert_eq!(r.trick_winner, Some(2));
    assert_eq!(state.phase, Phase::TrickEnd);
    assert_eq!(state.players[2].tricks_won, 1);
    // Cards stay visible until the trick is cleared
    assert_eq!(state.round.trick_plays.len(), 4);
    assert_eq!(state.turn, None);
}

#[test]
fn any_spade_beats_the_lead_suit() {
    let hands = [
        cards(&["2S", "2C"]),
        cards(&["AH", "3C"]),
        cards(&["KH", "4C"]),
        cards(&["QH", "5C"]),
    ];
    let mut state = playing_state(hands, 1);
    play_card(&mut state, 1, card("AH")).unwrap();
    play_card(&mut state, 2, card("KH")).unwrap();
    play_card(&mut state, 3, card("QH")).unwrap();
    let r = play_card(&mut state, 0, card("2S")).unwrap();
    assert_eq!(r.trick_winner, Some(0));
    assert!(r.broke_spades);
    assert!(state.round.spades_broken);
}

#[test]
fn winner_leads_next_trick_after_finish() {
    let hands = [
        cards(&["2S", "2C"]),
        cards(&["AH", "3C"]),
        cards(&["KH", "4C"]),
        cards(&["QH", "5C"]),
    ];
    let mut state = playing_state(hands, 1);
    for (seat, tok) in [(1u8, "AH"), (2, "KH"), (3, "QH"), (0, "2S")] {
        play_card(&mut state, seat, card(tok)).unwrap();
    }
    let r = finish_trick(&mut state).unwrap();
    assert_eq!(r.winner, 0);
    assert_eq!(r.phase, Phase::Playing);
    assert_eq!(state.turn, Some(0));
    assert_eq!(state.leader, Some(0));
    assert!(state.round.trick_plays.is_empty());
    assert_eq!(state.round.trick_lead, None);
    assert_eq!(state.round.completed_tricks.len(), 1);
    assert_eq!(state.round.last_trick().map(|t| t.lead), Some(Suit::Hearts));
    // Spades stay broken for the rest of the round
    assert!(state.round.spades_broken);
}

#[test]
fn must_follow_suit_when_able() {
    let hands = [
        cards(&["2H", "AS"]),
        cards(&["5H", "3C"]),
        cards(&["KD", "4C"]),
        cards(&["QD", "5C"]),
    ];
    let mut state = playing_state(hands, 1);
    play_card(&mut state, 1, card("5H")).unwrap();
    play_card(&mut state, 2, card("KD")).unwrap();
    play_card(&mut state, 3, card("QD")).unwrap();
    let before = state.clone();
    let err = play_card(&mut state, 0, card("AS")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::IllegalMove));
    assert_eq!(state, before);
    assert_eq!(legal_moves(&state, 0), cards(&["2H"]));
}

#[test]
fn cannot_lead_spades_before_broken() {
    let hands = [
        cards(&["AS", "2D"]),
        cards(&["5H", "3C"]),
        cards(&["KD", "4C"]),
        cards(&["QD", "5C"]),
    ];
    let mut state = playing_state(hands, 0);
    let err = play_card(&mut state, 0, card("AS")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::IllegalMove));
    assert!(!state.round.spades_broken);
}

#[test]
fn all_spade_hand_may_lead_spades_and_breaks_them() {
    let hands = [
        cards(&["AS", "KS"]),
        cards(&["5H", "3C"]),
        cards(&["KD", "4C"]),
        cards(&["QD", "5C"]),
    ];
    let mut state = playing_state(hands, 0);
    let r = play_card(&mut state, 0, card("KS")).unwrap();
    assert!(r.broke_spades);
    assert_eq!(state.round.trick_lead, Some(Suit::Spades));
}

#[test]
fn out_of_turn_and_missing_cards_are_rejected() {
    let hands = [
        cards(&["2H"]),
        cards(&["5H"]),
        cards(&["KD"]),
        cards(&["QD"]),
    ];
    let mut state = playing_state(hands, 1);
    let err = play_card(&mut state, 2, card("KD")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::OutOfTurn));
    let err = play_card(&mut state, 1, card("AH")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::IllegalMove));
}

#[test]
fn playing_outside_playing_phase_is_invalid_state() {
    let hands = [cards(&["2H"]), cards(&["5H"]), cards(&["KD"]), cards(&["QD"])];
    let mut state = playing_state(hands, 1);
    state.phase = Phase::Bidding;
    let err = play_card(&mut state, 1, card("5H")).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidState));
    let err = finish_trick(&mut state).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidState));
}

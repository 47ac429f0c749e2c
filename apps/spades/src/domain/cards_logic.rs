//! Card game logic: checking suits in hands, comparing card strength.
//!
//! Spades are always trump. Within a trick a card's strength is
//! (is spade, follows lead, rank); off-suit cards never win a trick.

use super::cards_types::{Card, Rank, Suit};
use super::state::PlayerId;

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `candidate` takes the trick from the current `best` card.
///
/// `best == None` means the candidate is the first card of the trick. Two
/// non-spades only compare when they share a suit; any other pairing loses.
/// Folded in play order from the lead card this picks the trick winner.
pub fn card_beats(candidate: Card, best: Option<Card>, _lead: Suit) -> bool {
    let Some(best) = best else {
        return true;
    };
    match (candidate.is_spade(), best.is_spade()) {
        (true, false) => true,
        (false, true) => false,
        _ if candidate.suit == best.suit => candidate.rank > best.rank,
        _ => false,
    }
}

/// Ordering key of a card within a trick led with `lead`.
pub fn trick_strength(card: Card, lead: Suit) -> (bool, bool, Rank) {
    (card.is_spade(), card.suit == lead, card.rank)
}

/// Index of the winning play: the strongest card under `trick_strength`.
///
/// Does not depend on the order of `plays`.
pub fn winning_play_index(plays: &[(PlayerId, Card)], lead: Suit) -> Option<usize> {
    plays
        .iter()
        .enumerate()
        .max_by_key(|&(_, &(_, card))| trick_strength(card, lead))
        .map(|(idx, _)| idx)
}

/// Card currently winning a partial (or complete) trick.
pub fn current_winning_card(plays: &[(PlayerId, Card)], lead: Suit) -> Option<Card> {
    winning_play_index(plays, lead).map(|idx| plays[idx].1)
}

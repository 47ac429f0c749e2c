//! Oracles and thin wrappers shared by the property suites.

use crate::domain::player::legal_moves_for_hand;
use crate::domain::state::PlayerId;
use crate::domain::{Card, Suit};

/// Legal moves for a bare hand, spades treated as broken unless asked otherwise.
pub fn legal_moves_helper(hand: &[Card], lead: Option<Suit>) -> Vec<Card> {
    legal_moves_for_hand(hand, lead, true)
}

/// Strength key of a card within a trick: trump first, then following, then rank.
/// Off-suit non-trump cards collapse to the bottom.
pub fn strength(card: Card, lead: Suit) -> (u8, u8) {
    if card.is_spade() {
        (2, card.rank.value())
    } else if card.suit == lead {
        (1, card.rank.value())
    } else {
        (0, 0)
    }
}

/// Winner computed by a max over strength keys rather than a running fold.
pub fn oracle_trick_winner(plays: &[(PlayerId, Card)], lead: Suit) -> Option<PlayerId> {
    plays
        .iter()
        .max_by_key(|(_, c)| strength(*c, lead))
        .map(|&(seat, _)| seat)
}

/// All orderings of a small slice.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            out.push(tail);
        }
    }
    out
}

//! Deck construction, shuffling and round-robin dealing.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::rules::{DECK_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// An ordered pack of cards, consumed by a single deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full 52-card deck in deterministic suit × rank order.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::DECK_ORDER {
            for rank in Rank::ALL {
                cards.push(Card { suit, rank });
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Uniform Fisher-Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Shuffle with a ChaCha stream seeded from `seed`.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Split the deck into `n` hands: card i goes to hand i mod n.
    pub fn deal(self, n: usize) -> Result<Vec<Vec<Card>>, DomainError> {
        if n == 0 || self.cards.len() % n != 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("cannot deal {} cards evenly to {n} hands", self.cards.len()),
            ));
        }
        let per_hand = self.cards.len() / n;
        let mut hands: Vec<Vec<Card>> = (0..n).map(|_| Vec::with_capacity(per_hand)).collect();
        for (i, card) in self.cards.into_iter().enumerate() {
            hands[i % n].push(card);
        }
        Ok(hands)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Build, shuffle (seeded) and deal a fresh deck to the four seats.
///
/// Hands come back in display order.
pub fn deal_hands(seed: u64) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    let mut deck = Deck::new();
    deck.shuffle_seeded(seed);
    let dealt = deck.deal(PLAYERS)?;

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (slot, mut hand) in hands.iter_mut().zip(dealt) {
        hand.sort_by_key(Card::display_key);
        *slot = hand;
    }
    Ok(hands)
}

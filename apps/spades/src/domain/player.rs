//! Seated player: identity, controller, hand and per-round tallies.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{team_of, TeamId};
use crate::domain::state::PlayerId;
use crate::domain::{hand_has_suit, Card, Suit};

/// Which computer policy drives an AI seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AiKind {
    #[default]
    Heuristic,
    Random,
}

/// Where a seat's decisions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerController {
    /// Waits for the collaborator to submit the decision.
    Human,
    /// Decided synchronously by the engine.
    Ai(AiKind),
}

impl PlayerController {
    pub fn is_human(&self) -> bool {
        matches!(self, PlayerController::Human)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub seat: PlayerId,
    pub controller: PlayerController,
    /// Kept in display order.
    pub hand: Vec<Card>,
    /// Set once per round.
    pub bid: Option<u8>,
    pub tricks_won: u8,
}

impl Player {
    pub fn new(name: impl Into<String>, seat: PlayerId, controller: PlayerController) -> Self {
        Self {
            name: name.into(),
            seat,
            controller,
            hand: Vec::new(),
            bid: None,
            tricks_won: 0,
        }
    }

    pub fn team(&self) -> TeamId {
        team_of(self.seat)
    }

    pub fn is_human(&self) -> bool {
        self.controller.is_human()
    }

    /// Replace the hand for a new deal and clear the round tallies.
    pub fn take_hand(&mut self, mut hand: Vec<Card>) {
        sort_hand(&mut hand);
        self.hand = hand;
        self.bid = None;
        self.tricks_won = 0;
    }

    /// Legal cards for this player given the trick state.
    pub fn legal_moves(&self, lead: Option<Suit>, spades_broken: bool) -> Vec<Card> {
        legal_moves_for_hand(&self.hand, lead, spades_broken)
    }
}

/// Sort cards into display order: spades, hearts, clubs, diamonds, low to high.
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort_by_key(Card::display_key);
}

/// Legal cards from `hand`, returned in display order.
///
/// - Following: cards of the lead suit, or the whole hand when void.
/// - Leading before spades are broken: non-spades, or the whole hand if it holds only spades.
/// - Leading after spades are broken: the whole hand.
pub fn legal_moves_for_hand(hand: &[Card], lead: Option<Suit>, spades_broken: bool) -> Vec<Card> {
    let mut legal: Vec<Card> = match lead {
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.suit == lead).collect()
        }
        Some(_) => hand.to_vec(),
        None if spades_broken => hand.to_vec(),
        None => {
            let non_spades: Vec<Card> = hand.iter().copied().filter(|c| !c.is_spade()).collect();
            if non_spades.is_empty() {
                hand.to_vec()
            } else {
                non_spades
            }
        }
    };
    sort_hand(&mut legal);
    legal
}

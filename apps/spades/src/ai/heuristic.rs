//! Heuristic: the default computer opponent.
//!
//! Bidding: one trick per spade of ten or better, plus one per non-spade
//! queen or better, clamped to the legal bid range.
//!
//! Play:
//! - On lead: the lowest-ranked legal card.
//! - Following: the cheapest legal card that takes the trick from the current
//!   winner; if none can, the lowest-ranked legal card.
//! - Equal ranks resolve to the earlier card in hand order.
//!
//! Deterministic: no randomness, the seed is ignored. The optional
//! `bid_adjust` config field shifts every bid before clamping.

use crate::ai::{AiConfig, AiError, AiPlayer};
use crate::domain::player_view::RoundView;
use crate::domain::rules::{MAX_BID, MIN_BID};
use crate::domain::state::PlayerId;
use crate::domain::{card_beats, current_winning_card, Card, Rank, Suit};

#[derive(Debug, Clone, Default)]
pub struct Heuristic {
    bid_adjust: i64,
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn from_config(config: &AiConfig) -> Self {
        let bid_adjust = config
            .get_custom("bid_adjust")
            .and_then(|v| v.as_i64())
            .unwrap_or(0)
            .clamp(-(MAX_BID as i64), MAX_BID as i64);
        Self { bid_adjust }
    }
}

/// Bid estimate for a hand: high spades plus high side cards, clamped to 1..=7.
pub fn estimate_bid(hand: &[Card]) -> u8 {
    let high_spades = hand
        .iter()
        .filter(|c| c.is_spade() && c.rank >= Rank::Ten)
        .count();
    let high_side = hand
        .iter()
        .filter(|c| !c.is_spade() && c.rank >= Rank::Queen)
        .count();
    ((high_spades + high_side) as u8).clamp(MIN_BID, MAX_BID)
}

fn lowest(cards: impl Iterator<Item = Card>) -> Option<Card> {
    cards.min_by_key(|c| c.rank)
}

/// Card choice for the cheapest-winner policy.
///
/// `legal` must be in hand order; `trick` holds the plays so far this trick.
pub fn choose_card(legal: &[Card], trick: &[(PlayerId, Card)], lead: Option<Suit>) -> Option<Card> {
    let winning = lead.and_then(|lead| current_winning_card(trick, lead).map(|w| (lead, w)));
    let Some((lead, winning)) = winning else {
        return lowest(legal.iter().copied());
    };
    lowest(
        legal
            .iter()
            .copied()
            .filter(|&c| card_beats(c, Some(winning), lead)),
    )
    .or_else(|| lowest(legal.iter().copied()))
}

impl AiPlayer for Heuristic {
    fn choose_bid(&self, state: &RoundView) -> Result<u8, AiError> {
        let legal = state.legal_bids();
        let target = (estimate_bid(&state.hand) as i64 + self.bid_adjust)
            .clamp(MIN_BID as i64, MAX_BID as i64) as u8;
        if legal.contains(&target) {
            Ok(target)
        } else {
            Err(AiError::InvalidMove(format!(
                "bid {target} not among legal bids {legal:?}"
            )))
        }
    }

    fn choose_play(&self, state: &RoundView) -> Result<Card, AiError> {
        let legal = state.legal_plays();
        choose_card(&legal, &state.trick_plays, state.trick_lead)
            .ok_or_else(|| AiError::InvalidMove("No legal plays available".into()))
    }
}

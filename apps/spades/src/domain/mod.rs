//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
#[cfg(test)]
pub mod fixtures;
pub mod game_transition;
pub mod lifecycle;
pub mod player;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
#[cfg(test)]
mod test_state_helpers;
pub mod tricks;

#[cfg(test)]
mod domain_prop_helpers;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_round;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, current_winning_card, hand_has_suit, winning_play_index};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Color, Rank, Suit};
pub use dealing::{deal_hands, Deck};
pub use lifecycle::{MatchOutcome, SeatSpec};
pub use player::{AiKind, Player, PlayerController};
pub use rules::{team_of, valid_bid_range, TeamId};
pub use scoring::{RoundSummary, TeamRoundScore, TeamScore};
pub use seed_derivation::{derive_ai_seed, derive_dealing_seed};
pub use state::{MatchState, Phase, PlayerId};

//! AI player module - computer decisions for seats driven by the engine.
//!
//! - `AiPlayer` trait for decision policies
//! - `Heuristic`: the default opponent (cheapest-winner play, honour-count bidding)
//! - `RandomPlayer`: uniform legal moves, seedable
//! - a static registry and JSON config for constructing them

mod config;
mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use config::AiConfig;
pub use heuristic::{choose_card, estimate_bid, Heuristic};
pub use random::RandomPlayer;
pub use registry::{by_name, for_kind, kind_by_name, registered_ais, AiFactory};
pub use trait_def::{AiError, AiPlayer};

use crate::domain::AiKind;

/// Build the AI for a seat from its registered factory.
pub fn create_ai(kind: AiKind, config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync> {
    (for_kind(kind).make)(config)
}

//! How to register an AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add a new `AiFactory` entry to the static list with stable `name` and `version`.
//! 3) Map its `AiKind` in `for_kind` so seats can select it.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use crate::ai::{AiConfig, AiPlayer, Heuristic, RandomPlayer};
use crate::domain::AiKind;

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name (case-insensitive).
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}

/// Factory backing a seat's `AiKind`.
pub fn for_kind(kind: AiKind) -> &'static AiFactory {
    match kind {
        AiKind::Heuristic => &AI_FACTORIES[0],
        AiKind::Random => &AI_FACTORIES[1],
    }
}

/// Reverse lookup used when parsing configuration.
pub fn kind_by_name(name: &str) -> Option<AiKind> {
    let factory = by_name(name)?;
    [AiKind::Heuristic, AiKind::Random]
        .into_iter()
        .find(|&k| for_kind(k).name == factory.name)
}

fn make_random_player(config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(RandomPlayer::new(config.seed()))
}

fn make_heuristic(config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(Heuristic::from_config(config))
}

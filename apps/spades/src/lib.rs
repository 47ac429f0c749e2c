#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod game_flow;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use ai::{create_ai, AiConfig, AiError, AiPlayer};
pub use config::TableConfig;
pub use domain::lifecycle::{MatchOutcome, SeatSpec};
pub use domain::player_view::{RoundView, SeatView, TableView};
pub use domain::{AiKind, Card, MatchState, Phase, PlayerController, PlayerId};
pub use error::AppError;
pub use errors::domain::{DomainError, ValidationKind};
pub use game_flow::{AiFailureMode, FlowStep, GameFlowService, NextStep, StepEvent};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

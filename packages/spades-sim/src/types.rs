//! Shared types for the simulator.

use clap::ValueEnum;
use spades::ai::for_kind;
use spades::AiKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    pub fn kind(self) -> AiKind {
        match self {
            AiType::Heuristic => AiKind::Heuristic,
            AiType::Random => AiKind::Random,
        }
    }

    /// Registry name of the AI behind this type.
    pub fn name(self) -> &'static str {
        for_kind(self.kind()).name
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

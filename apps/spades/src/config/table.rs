//! Table configuration read from the environment.
//!
//! - `SPADES_SEED`: match seed (`u64`, decimal or `0x` hex). Unset means an entropy seed.
//! - `SPADES_PLAYER_NAME`: the human's name (defaults to "You").
//! - `SPADES_OPPONENT_AI`: registered AI name for the three opponents (defaults to Heuristic).
//! - `SPADES_AI_CONFIG`: JSON `AiConfig` for computer seats, e.g. `{"seed": 7, "bid_adjust": -1}`.

use std::env;

use rand::Rng;

use crate::ai::{kind_by_name, AiConfig};
use crate::domain::lifecycle::HUMAN_DEFAULT_NAME;
use crate::domain::AiKind;
use crate::error::AppError;

pub const SEED_VAR: &str = "SPADES_SEED";
pub const PLAYER_NAME_VAR: &str = "SPADES_PLAYER_NAME";
pub const OPPONENT_AI_VAR: &str = "SPADES_OPPONENT_AI";
pub const AI_CONFIG_VAR: &str = "SPADES_AI_CONFIG";

#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    pub seed: Option<u64>,
    pub player_name: String,
    pub opponent_ai: AiKind,
    pub ai_config: AiConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            player_name: HUMAN_DEFAULT_NAME.to_string(),
            opponent_ai: AiKind::default(),
            ai_config: AiConfig::default(),
        }
    }
}

impl TableConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = var(SEED_VAR).map(|raw| parse_seed(&raw)).transpose()?;
        let player_name = var(PLAYER_NAME_VAR).unwrap_or_else(|| HUMAN_DEFAULT_NAME.to_string());
        let opponent_ai = match var(OPPONENT_AI_VAR) {
            Some(raw) => kind_by_name(&raw).ok_or_else(|| {
                AppError::config(format!(
                    "{OPPONENT_AI_VAR} names an unknown AI: '{raw}'"
                ))
            })?,
            None => AiKind::default(),
        };
        let ai_config = var(AI_CONFIG_VAR)
            .map(|raw| parse_ai_config(&raw))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            seed,
            player_name,
            opponent_ai,
            ai_config,
        })
    }

    /// The configured seed, or a fresh one from `rng`.
    pub fn seed_or_random<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        self.seed.unwrap_or_else(|| rng.random())
    }
}

/// Parse a seed in decimal or `0x`-prefixed hex.
pub fn parse_seed(raw: &str) -> Result<u64, AppError> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => raw.replace('_', "").parse::<u64>(),
    };
    parsed.map_err(|_| AppError::config(format!("{SEED_VAR} must be a u64, got: '{raw}'")))
}

/// Parse a JSON `AiConfig` document; it must be an object.
pub fn parse_ai_config(raw: &str) -> Result<AiConfig, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::config(format!("{AI_CONFIG_VAR} is not a valid AI config: {e}")))
}

//! AI configuration handling.
//!
//! Typed view over a JSON AI config: standard fields are extracted, anything
//! else is preserved in `custom` for the implementation to read.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for AI players.
///
/// A configured `seed` replaces the match seed when per-decision AI seeds are
/// derived, so computer play can be varied independently of the deal.
///
/// # Example JSON Config
///
/// ```json
/// {"seed": 12345, "bid_adjust": -1}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiConfig {
    /// Optional RNG seed for deterministic AI behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// AI-specific configuration.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Create an AiConfig from optional JSON value.
    ///
    /// Unparseable or missing input yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// Same custom fields, seeded for one decision.
    pub fn for_decision(&self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            custom: self.custom.clone(),
        }
    }

    /// Create an empty configuration (no seed, no custom fields).
    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    /// Create a configuration with just a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}

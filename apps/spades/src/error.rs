use thiserror::Error;

use crate::ai::AiError;
use crate::errors::domain::DomainError;

/// Application-edge error: what binaries and collaborators see.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("AI error: {0}")]
    Ai(#[from] AiError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Stable machine-readable code for each variant.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::Invariant(_)) => "INVARIANT",
            AppError::Domain(_) => "RULE_VIOLATION",
            AppError::Ai(_) => "AI_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
        }
    }
}

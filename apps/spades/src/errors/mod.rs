//! Error handling for the Spades engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};

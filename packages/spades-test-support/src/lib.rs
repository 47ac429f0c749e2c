//! Spades test support utilities
//!
//! Shared by the integration test binaries of the workspace.

pub mod logging;

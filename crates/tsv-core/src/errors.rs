//! Cross-cutting error types for the TypeSpec validator.
//!
//! Domain-specific errors (e.g., `DiscoveryError`, `GitError`) are defined in
//! their respective crates; the CLI converges them via `anyhow`.

use thiserror::Error;

/// Errors raised when parsing shared enum values from user input or config.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A severity string was not one of the known values.
    #[error("unknown severity '{value}' (expected 'error' or 'warning')")]
    UnknownSeverity { value: String },

    /// A check id string did not match any known check.
    #[error("unknown check id '{value}'")]
    UnknownCheck { value: String },
}

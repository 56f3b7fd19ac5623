//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when supplying a configuration to the engine
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration was supplied
    #[error("No configuration supplied")]
    Missing,

    /// Builder finished without an initial state
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitial,

    /// Configuration document could not be parsed
    #[error("Configuration parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Structural problems reported by [`Configuration::validate`](super::Configuration::validate).
///
/// These never stop an engine from being constructed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("Initial state '{initial}' is not declared in states")]
    UndeclaredInitial { initial: String },

    #[error("Transition '{event}' from '{state}' targets undeclared state '{target}'")]
    DanglingTarget {
        state: String,
        event: String,
        target: String,
    },
}

//! Transition error types.

use thiserror::Error;

/// Errors that can occur when moving between states.
///
/// A rejected transition never changes the engine, so the same instance
/// can keep being used after any of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    NoTransition { state: String, event: String },

    #[error("Current state '{state}' has no definition")]
    UndefinedState { state: String },
}

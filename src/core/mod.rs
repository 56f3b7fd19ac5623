//! Core types shared by the configuration and the engine.
//!
//! This module contains:
//! - Identifier aliases for states and events
//! - The one-step undo/redo history slots
//!
//! Nothing in here performs lookups against a configuration; that is the
//! engine's job.

mod history;

pub use history::History;

/// Identifier of a state in a configuration.
pub type StateId = String;

/// Identifier of an event in a state's transition map.
pub type EventId = String;

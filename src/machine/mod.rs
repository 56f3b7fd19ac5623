//! The state machine engine.
//!
//! # Key Concepts
//!
//! - **Jump**: `change_state` moves to any declared state
//! - **Trigger**: `trigger` follows the current state's transition for an event
//! - **History**: one step back (`undo`) and one step forward (`redo`)
//!
//! Rejected transitions are reported as [`TransitionError`] and leave the
//! engine untouched. Having nothing to undo or redo is not an error; those
//! operations return `false` instead.

mod error;
mod fsm;

pub use error::TransitionError;
pub use fsm::Fsm;

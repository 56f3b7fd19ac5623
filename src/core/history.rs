//! One-step transition history.
//!
//! The engine remembers exactly one state to go back to and one state to go
//! forward to. There is no stack: every new entry overwrites the slot.

use super::StateId;
use serde::{Deserialize, Serialize};

/// The previous/next history slots of a state machine.
///
/// `previous` is filled by every successful transition and consumed by undo.
/// `next` is filled only by undo and consumed by redo.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::History;
///
/// let mut history = History::new();
/// history.record("idle");
/// assert_eq!(history.previous(), Some("idle"));
///
/// let back = history.take_previous();
/// assert_eq!(back.as_deref(), Some("idle"));
/// assert!(history.previous().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    previous: Option<StateId>,
    next: Option<StateId>,
}

impl History {
    /// Create history with both slots unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `from` as the state to return to on undo.
    ///
    /// The redo slot is left alone.
    pub fn record(&mut self, from: impl Into<StateId>) {
        self.previous = Some(from.into());
    }

    /// Remember `state` as the state to return to on redo.
    pub fn remember_next(&mut self, state: impl Into<StateId>) {
        self.next = Some(state.into());
    }

    /// Take the undo slot, leaving it unset.
    pub fn take_previous(&mut self) -> Option<StateId> {
        self.previous.take()
    }

    /// Take the redo slot, leaving it unset.
    pub fn take_next(&mut self) -> Option<StateId> {
        self.next.take()
    }

    /// Unset both slots.
    pub fn clear(&mut self) {
        self.previous = None;
        self.next = None;
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// True when neither slot holds a state.
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

//! Finite state machine engine driven by a configuration.

use crate::config::{ConfigError, Configuration};
use crate::core::{History, StateId};
use crate::machine::error::TransitionError;
use tracing::debug;

/// Finite state machine over a [`Configuration`].
///
/// Tracks the current state and one step of undo/redo history. Every
/// operation is synchronous; sharing an engine between threads needs an
/// external lock around the whole instance.
///
/// # Example
///
/// ```rust
/// use fsm_engine::fsm_config;
/// use fsm_engine::machine::Fsm;
///
/// let mut fsm = Fsm::new(fsm_config! {
///     initial: "green",
///     states: {
///         "green" => { "timer" => "yellow" },
///         "yellow" => { "timer" => "red" },
///         "red" => { "timer" => "green" },
///     }
/// });
///
/// fsm.trigger("timer").unwrap();
/// fsm.trigger("timer").unwrap();
/// assert_eq!(fsm.state(), "red");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "yellow");
///
/// fsm.reset();
/// assert_eq!(fsm.state(), "green");
/// assert_eq!(fsm.states(Some("timer")), vec!["green", "yellow", "red"]);
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Configuration,
    current: StateId,
    history: History,
}

impl Fsm {
    /// Create an engine in the configuration's initial state.
    ///
    /// The configuration is taken as is; malformed state graphs show up as
    /// [`TransitionError`]s when used.
    pub fn new(config: Configuration) -> Self {
        let current = config.initial.clone();
        Self {
            config,
            current,
            history: History::new(),
        }
    }

    /// Create an engine from a configuration that may be absent.
    pub fn try_new(config: Option<Configuration>) -> Result<Self, ConfigError> {
        config.map(Self::new).ok_or(ConfigError::Missing)
    }

    /// Create an engine from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Configuration::from_json(json).map(Self::new)
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Get the active state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    pub fn previous_state(&self) -> Option<&str> {
        self.history.previous()
    }

    pub fn next_state(&self) -> Option<&str> {
        self.history.next()
    }

    pub fn can_undo(&self) -> bool {
        self.history.previous().is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.history.next().is_some()
    }

    /// Jump directly to `state`.
    ///
    /// The redo slot survives a direct jump.
    pub fn change_state(&mut self, state: &str) -> Result<(), TransitionError> {
        if !self.config.has_state(state) {
            debug!(from = %self.current, to = state, "rejected jump to unknown state");
            return Err(TransitionError::UnknownState {
                state: state.to_string(),
            });
        }

        let from = std::mem::replace(&mut self.current, state.to_string());
        debug!(from = %from, to = %self.current, "changed state");
        self.history.record(from);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// The target is not required to be a declared state. Landing on an
    /// undeclared state makes every later trigger fail with
    /// [`TransitionError::UndefinedState`] until the engine is moved away.
    pub fn trigger(&mut self, event: &str) -> Result<(), TransitionError> {
        let Some(def) = self.config.state_def(&self.current) else {
            debug!(state = %self.current, event, "rejected event on undefined state");
            return Err(TransitionError::UndefinedState {
                state: self.current.clone(),
            });
        };

        let Some(target) = def.target(event) else {
            debug!(state = %self.current, event, "rejected event with no transition");
            return Err(TransitionError::NoTransition {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };

        let target = target.to_string();
        let from = std::mem::replace(&mut self.current, target);
        debug!(from = %from, to = %self.current, event, "triggered transition");
        self.history.record(from);
        Ok(())
    }

    /// Return to the initial state. History slots are left as they are.
    pub fn reset(&mut self) {
        self.current = self.config.initial.clone();
        debug!(state = %self.current, "reset to initial state");
    }

    /// List declared states in declaration order.
    ///
    /// With `Some(event)`, only the states whose transitions include `event`
    /// are listed, in the same order.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, def)| event.is_none_or(|e| def.handles(e)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Go back to the previous state.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.take_previous() else {
            return false;
        };

        let from = std::mem::replace(&mut self.current, previous);
        debug!(from = %from, to = %self.current, "undo");
        self.history.remember_next(from);
        true
    }

    /// Go forward to the state left by the last undo.
    /// Returns `false` when there is nothing to redo.
    ///
    /// Redo does not refill the undo slot.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.take_next() else {
            return false;
        };

        let from = std::mem::replace(&mut self.current, next);
        debug!(from = %from, to = %self.current, "redo");
        true
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl From<Configuration> for Fsm {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}

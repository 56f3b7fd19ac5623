//! Declarative state machine configuration.
//!
//! A configuration names the initial state and, for every state, the map from
//! event to target state. It is plain data: it is serializable in the shape
//!
//! ```json
//! {
//!   "initial": "green",
//!   "states": {
//!     "green":  { "transitions": { "timer": "yellow" } },
//!     "yellow": { "transitions": { "timer": "red" } },
//!     "red":    { "transitions": { "timer": "green" } }
//!   }
//! }
//! ```
//!
//! States keep their declaration order, which is the order reported by
//! [`Fsm::states`](crate::machine::Fsm::states).

use crate::core::{EventId, StateId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;
mod validate;

pub use error::{ConfigError, ConfigIssue};

/// Definition of a single state: where each event leads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event identifier -> target state identifier
    #[serde(default)]
    pub transitions: IndexMap<EventId, StateId>,
}

impl StateDef {
    /// Create a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Target of `event`, if this state defines it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Immutable configuration of a state machine.
///
/// No structural validation happens when a configuration is built or
/// parsed. Neither the initial state nor any transition target has to be
/// declared in `states`; see [`Configuration::validate`] for an opt-in check.
///
/// # Example
///
/// ```rust
/// use fsm_engine::config::Configuration;
///
/// let config = Configuration::from_json(r#"{
///     "initial": "A",
///     "states": {
///         "A": { "transitions": { "go": "B" } },
///         "B": { "transitions": {} }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "A");
/// assert_eq!(config.target("A", "go"), Some("B"));
/// assert!(config.target("B", "go").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Identifier of the starting state
    pub initial: StateId,

    /// State identifier -> definition, in declaration order
    pub states: IndexMap<StateId, StateDef>,
}

impl Configuration {
    /// Create a configuration with no states.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// A `null` document is an absent configuration and yields
    /// [`ConfigError::Missing`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let parsed: Option<Configuration> = serde_json::from_str(json)?;
        parsed.ok_or(ConfigError::Missing)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn state_def(&self, state: &str) -> Option<&StateDef> {
        self.states.get(state)
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Target of `event` when fired from `state`.
    ///
    /// Returns `None` when the state is not declared or does not handle the
    /// event.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.state_def(state).and_then(|def| def.target(event))
    }

    /// Check the configuration for undeclared initial and target states.
    ///
    /// All issues are collected; nothing here is required before building an
    /// engine.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_engine::config::{ConfigIssue, Configuration};
    /// use stillwater::validation::Validation;
    ///
    /// let config = Configuration::from_json(r#"{
    ///     "initial": "A",
    ///     "states": { "A": { "transitions": { "go": "Z" } } }
    /// }"#).unwrap();
    ///
    /// match config.validate() {
    ///     Validation::Failure(issues) => {
    ///         assert_eq!(issues.len(), 1);
    ///         assert!(issues
    ///             .iter()
    ///             .all(|i| matches!(i, ConfigIssue::DanglingTarget { .. })));
    ///     }
    ///     Validation::Success(_) => panic!("Z is not declared"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        validate::validate(self)
    }
}

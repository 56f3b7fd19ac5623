//! Builder for constructing configurations.

use crate::config::{ConfigError, Configuration, StateDef};
use crate::core::StateId;
use indexmap::IndexMap;

/// Builder for constructing configurations with a fluent API.
///
/// States appear in the order they are first mentioned, either through
/// [`state`](Self::state) or as the source of a [`transition`](Self::transition).
/// Targets are not declared implicitly.
///
/// # Example
///
/// ```rust
/// use fsm_engine::builder::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("draft")
///     .transition("draft", "submit", "review")
///     .transition("review", "approve", "published")
///     .transition("review", "reject", "draft")
///     .state("published")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.states.len(), 3);
/// assert_eq!(config.target("review", "reject"), Some("draft"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: IndexMap<StateId, StateDef>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring an existing state keeps its transitions.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add a transition, declaring `from` if needed.
    /// A later transition for the same `from` and `event` replaces the earlier one.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<String>,
        to: impl Into<StateId>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if no initial state was set.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitial)?;

        Ok(Configuration {
            initial,
            states: self.states,
        })
    }
}

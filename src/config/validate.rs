//! Structural checks for configurations using Validation.
//!
//! The engine accepts any configuration. These checks exist for callers who
//! want to know up front which states can never be entered cleanly, and they
//! report every issue at once rather than stopping at the first.

use super::error::ConfigIssue;
use super::Configuration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check that the initial state and every transition target are declared.
pub(crate) fn validate(config: &Configuration) -> Validation<(), NonEmptyVec<ConfigIssue>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

    if !config.has_state(&config.initial) {
        checks.push(Validation::fail(ConfigIssue::UndeclaredInitial {
            initial: config.initial.clone(),
        }));
    }

    for (state, def) in &config.states {
        for (event, target) in &def.transitions {
            if !config.has_state(target) {
                checks.push(Validation::fail(ConfigIssue::DanglingTarget {
                    state: state.clone(),
                    event: event.clone(),
                    target: target.clone(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

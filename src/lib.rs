//! fsm-engine: a minimal finite state machine runtime
//!
//! A machine is described declaratively: an initial state plus, for each
//! state, a map from event name to target state. The engine tracks a single
//! current state, moves by event or by direct jump, and remembers one step of
//! undo/redo history.
//!
//! # Core Concepts
//!
//! - **Configuration**: Serializable description of states and transitions
//! - **Fsm**: The engine holding the current state and history
//! - **History**: Exactly one previous and one next state, never a stack
//!
//! # Example
//!
//! ```rust
//! use fsm_engine::{Fsm, TransitionError};
//!
//! let mut fsm = Fsm::from_json(r#"{
//!     "initial": "A",
//!     "states": {
//!         "A": { "transitions": { "go": "B" } },
//!         "B": { "transitions": {} }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(fsm.states(None), vec!["A", "B"]);
//! assert_eq!(fsm.states(Some("go")), vec!["A"]);
//!
//! fsm.trigger("go").unwrap();
//! assert_eq!(fsm.state(), "B");
//! assert!(matches!(fsm.trigger("go"), Err(TransitionError::NoTransition { .. })));
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "A");
//! assert!(!fsm.undo());
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "B");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::ConfigBuilder;
pub use crate::config::{ConfigError, ConfigIssue, Configuration, StateDef};
pub use crate::core::{EventId, History, StateId};
pub use crate::machine::{Fsm, TransitionError};

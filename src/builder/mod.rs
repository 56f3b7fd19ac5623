//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and the [`fsm_config!`](crate::fsm_config)
//! macro for writing configurations in code instead of loading them from JSON.

pub mod config;
pub mod macros;

pub use config::ConfigBuilder;

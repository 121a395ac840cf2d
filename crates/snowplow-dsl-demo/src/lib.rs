//! Snowplow DSL demo — a single screen that tracks its lifecycle and
//! interactions to a structured log.

pub mod config;
pub mod error;
pub mod logging_tracker;
pub mod screen;

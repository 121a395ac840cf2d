//! Snowplow DSL Core — shared payload abstractions.
//!
//! This crate defines the field maps, self-describing records and the seams
//! (tracker, clock, event ids) that the builder and dispatch crates depend
//! on. It contains no tracker implementation.

pub mod clock;
pub mod error;
pub mod event_id;
pub mod field;
pub mod kind;
pub mod record;
pub mod schema;
pub mod tracker;

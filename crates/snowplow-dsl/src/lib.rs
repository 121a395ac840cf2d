//! Snowplow DSL — event assembly and typed dispatch.
//!
//! `Snowplow` collects context records and exactly one event record, then
//! hands them to a `Tracker`. The `dispatch` helpers wrap it with the
//! default page contexts most screens need.

pub mod application;
pub mod domain;

pub use application::assembler::Snowplow;
pub use application::dispatch::{assemble, dispatch, dispatch_kind};
pub use domain::builder::{EventBuilder, KindBuilder};

//! Shared test doubles for the Snowplow DSL.

mod clock;
mod event_id;
mod tracker;

pub use clock::FixedClock;
pub use event_id::SequenceEventIds;
pub use tracker::{FailingTracker, RecordingTracker};

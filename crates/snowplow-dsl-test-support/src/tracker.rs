//! Test trackers — mock `Tracker` implementations for tests.

use std::sync::Mutex;

use snowplow_dsl_core::error::DslError;
use snowplow_dsl_core::record::TrackedEvent;
use snowplow_dsl_core::tracker::Tracker;

/// A tracker that records every event it is handed and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    tracked: Mutex<Vec<TrackedEvent>>,
}

impl RecordingTracker {
    /// Create an empty recording tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all tracked events, in dispatch order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn tracked_events(&self) -> Vec<TrackedEvent> {
        self.tracked.lock().unwrap().clone()
    }

    /// Number of `track` calls received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn call_count(&self) -> usize {
        self.tracked.lock().unwrap().len()
    }
}

impl Tracker for RecordingTracker {
    fn track(&self, event: TrackedEvent) -> Result<(), DslError> {
        self.tracked.lock().unwrap().push(event);
        Ok(())
    }
}

/// A tracker that rejects every event with a tracker error. Useful for
/// testing that failures reach the caller untouched.
#[derive(Debug)]
pub struct FailingTracker;

impl Tracker for FailingTracker {
    fn track(&self, _event: TrackedEvent) -> Result<(), DslError> {
        Err(DslError::Tracker("emitter unavailable".into()))
    }
}

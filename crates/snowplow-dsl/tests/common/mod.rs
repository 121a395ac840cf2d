//! Shared test helpers for dispatch integration tests.
#![allow(dead_code)]

use snowplow_dsl_core::field::{FieldMap, FieldValue};
use snowplow_dsl_core::record::TrackedEvent;
use snowplow_dsl_test_support::{FixedClock, RecordingTracker, SequenceEventIds};

/// Deterministic collaborators for one test.
pub struct Harness {
    pub clock: FixedClock,
    pub event_ids: SequenceEventIds,
    pub tracker: RecordingTracker,
}

impl Harness {
    /// A harness able to dispatch up to `events` events.
    pub fn new(events: u128) -> Self {
        Self {
            clock: FixedClock::standard(),
            event_ids: SequenceEventIds::counting(events),
            tracker: RecordingTracker::new(),
        }
    }

    /// The single event the tracker received.
    pub fn only_event(&self) -> TrackedEvent {
        let mut tracked = self.tracker.tracked_events();
        assert_eq!(tracked.len(), 1, "expected exactly one tracked event");
        tracked.remove(0)
    }
}

/// The impression items stored under `list`.
pub fn list_items(fields: &FieldMap) -> Vec<FieldMap> {
    fields
        .get("list")
        .and_then(FieldValue::as_list)
        .map(<[FieldMap]>::to_vec)
        .unwrap_or_default()
}

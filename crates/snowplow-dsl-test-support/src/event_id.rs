//! Test event ids — deterministic `EventIdGenerator` implementations.

use std::sync::Mutex;

use snowplow_dsl_core::event_id::EventIdGenerator;
use uuid::Uuid;

/// Returns ids from a predetermined sequence. Panics if the sequence is
/// exhausted, so a test that dispatches more events than it expects fails
/// loudly.
#[derive(Debug)]
pub struct SequenceEventIds {
    ids: Vec<Uuid>,
    index: Mutex<usize>,
}

impl SequenceEventIds {
    /// Create a generator that yields `ids` in order.
    #[must_use]
    pub fn new(ids: Vec<Uuid>) -> Self {
        Self {
            ids,
            index: Mutex::new(0),
        }
    }

    /// Create a generator yielding `count` ids built from `1..=count`, so
    /// ids are readable in assertion output.
    #[must_use]
    pub fn counting(count: u128) -> Self {
        Self::new((1..=count).map(Uuid::from_u128).collect())
    }
}

impl EventIdGenerator for SequenceEventIds {
    fn next_id(&self) -> Uuid {
        let mut index = self.index.lock().unwrap();
        let id = self.ids[*index];
        *index += 1;
        id
    }
}

//! Event identifier generation.
//!
//! Every tracked event gets a fresh identifier just before dispatch. In
//! production this is a random v4 UUID; tests inject a fixed sequence.

use uuid::Uuid;

/// Source of unique event identifiers.
pub trait EventIdGenerator: Send + Sync {
    /// Returns the identifier for the next dispatched event.
    fn next_id(&self) -> Uuid;
}

/// Generates random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEventIds;

impl EventIdGenerator for RandomEventIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_event_ids_are_unique_v4() {
        let ids = RandomEventIds;

        let first = ids.next_id();
        let second = ids.next_id();

        assert_ne!(first, second);
        assert_eq!(first.get_version_num(), 4);
    }
}

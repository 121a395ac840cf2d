//! Tracker abstraction — the external collaborator that delivers events.

use std::sync::Arc;

use crate::error::DslError;
use crate::record::TrackedEvent;

/// Accepts finished events for delivery. Transport, batching and retry are
/// the implementation's concern.
pub trait Tracker: Send + Sync {
    /// Hands one event, with its contexts, to the tracker.
    ///
    /// # Errors
    ///
    /// Returns `DslError::Tracker` (or another variant) if the implementation
    /// rejects the event.
    fn track(&self, event: TrackedEvent) -> Result<(), DslError>;
}

impl<T: Tracker + ?Sized> Tracker for Arc<T> {
    fn track(&self, event: TrackedEvent) -> Result<(), DslError> {
        (**self).track(event)
    }
}

impl<T: Tracker + ?Sized> Tracker for &T {
    fn track(&self, event: TrackedEvent) -> Result<(), DslError> {
        (**self).track(event)
    }
}

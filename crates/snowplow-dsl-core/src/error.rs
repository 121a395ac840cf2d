//! Error types for event assembly and dispatch.

use thiserror::Error;

use crate::kind::EventKind;

/// Top-level error type for the Snowplow DSL.
#[derive(Debug, Error)]
pub enum DslError {
    /// A kind tag that names none of the recognized event kinds.
    #[error("unsupported event kind: {0}")]
    UnsupportedKind(String),

    /// `track()` was reached without any event kind being configured.
    #[error("missing event: no event kind was configured before track")]
    MissingEvent,

    /// More than one event kind was configured on a single dispatch.
    #[error("duplicate event: {second} configured after {first}")]
    DuplicateEvent {
        /// The kind configured first.
        first: EventKind,
        /// The conflicting kind configured afterwards.
        second: EventKind,
    },

    /// A runtime-selected builder was swapped for one of another kind during
    /// configuration.
    #[error("kind mismatch: requested {requested}, configured {configured}")]
    KindMismatch {
        /// The kind named by the caller.
        requested: EventKind,
        /// The kind of the builder after configuration.
        configured: EventKind,
    },

    /// A payload could not be rendered to JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A failure reported by a tracker implementation.
    #[error("tracker error: {0}")]
    Tracker(String),
}

impl From<serde_json::Error> for DslError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

//! A tracker that writes every event to the structured log.

use snowplow_dsl_core::error::DslError;
use snowplow_dsl_core::record::TrackedEvent;
use snowplow_dsl_core::tracker::Tracker;
use tracing::info;

use crate::config::DemoConfig;

/// Emits each tracked event as one `tracing` record carrying the full JSON
/// payload.
#[derive(Debug, Clone)]
pub struct LoggingTracker {
    namespace: String,
    app_id: String,
}

impl LoggingTracker {
    /// Creates a tracker reporting under `namespace` and `app_id`.
    #[must_use]
    pub fn new(namespace: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            app_id: app_id.into(),
        }
    }

    /// Creates a tracker from demo configuration.
    #[must_use]
    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(config.namespace.clone(), config.app_id.clone())
    }

    /// Renders the line this tracker logs for `event`.
    ///
    /// # Errors
    ///
    /// Returns `DslError::Serialization` if the payload cannot be rendered.
    pub fn render(&self, event: &TrackedEvent) -> Result<serde_json::Value, DslError> {
        let mut payload = event.to_json()?;
        if let Some(object) = payload.as_object_mut() {
            object.insert("namespace".to_owned(), self.namespace.clone().into());
            object.insert("app_id".to_owned(), self.app_id.clone().into());
        }
        Ok(payload)
    }
}

impl Tracker for LoggingTracker {
    fn track(&self, event: TrackedEvent) -> Result<(), DslError> {
        let payload = self.render(&event)?;
        info!(
            namespace = %self.namespace,
            app_id = %self.app_id,
            event_id = %event.event_id,
            schema = %event.event.schema(),
            payload = %payload,
            "event tracked"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use snowplow_dsl_core::field::FieldMap;
    use snowplow_dsl_core::record::SelfDescribing;
    use snowplow_dsl_core::schema;
    use uuid::Uuid;

    fn sample_event() -> TrackedEvent {
        let mut data = FieldMap::new();
        data.insert("view_type", "show");
        TrackedEvent {
            event_id: Uuid::from_u128(7),
            occurred_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
            event: SelfDescribing::new(schema::PAGE_VIEW, data),
            contexts: Vec::new(),
        }
    }

    #[test]
    fn test_render_tags_payload_with_tracker_identity() {
        let tracker = LoggingTracker::new("namespace", "appId");

        let payload = tracker.render(&sample_event()).unwrap();

        assert_eq!(payload["namespace"], json!("namespace"));
        assert_eq!(payload["app_id"], json!("appId"));
        assert_eq!(payload["event"]["data"], json!({ "view_type": "show" }));
        assert_eq!(payload["contexts"], json!([]));
    }

    #[test]
    fn test_track_succeeds_without_subscriber() {
        let tracker = LoggingTracker::new("namespace", "appId");

        assert!(tracker.track(sample_event()).is_ok());
    }
}

//! Self-describing records and the tracked-event envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::DslError;
use crate::field::FieldMap;
use crate::schema::SchemaId;

/// A payload tagged with the schema that describes it. Serializes to the
/// `{"schema": ..., "data": {...}}` shape trackers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfDescribing {
    schema: SchemaId,
    data: FieldMap,
}

impl SelfDescribing {
    /// Creates a record from a schema and its fields.
    #[must_use]
    pub fn new(schema: SchemaId, data: FieldMap) -> Self {
        Self { schema, data }
    }

    /// The schema this record is tagged with.
    #[must_use]
    pub fn schema(&self) -> &SchemaId {
        &self.schema
    }

    /// The record's fields.
    #[must_use]
    pub fn data(&self) -> &FieldMap {
        &self.data
    }
}

/// The single event a dispatch carries.
pub type EventRecord = SelfDescribing;

/// Auxiliary metadata attached alongside an event.
pub type ContextRecord = SelfDescribing;

/// Trait that every field builder implements.
pub trait Describing {
    /// The fixed schema for records produced by this builder.
    const SCHEMA: SchemaId;

    /// Returns a snapshot of the fields written so far.
    fn fields(&self) -> FieldMap;

    /// Packages the current fields with the schema into an immutable record.
    fn build(&self) -> SelfDescribing {
        SelfDescribing::new(Self::SCHEMA, self.fields())
    }
}

/// An event as handed to a tracker: the record, its contexts, and the
/// identity assigned just before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedEvent {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Timestamp taken at dispatch.
    pub occurred_at: DateTime<Utc>,
    /// The event payload.
    pub event: EventRecord,
    /// Context payloads, in the order they were added.
    pub contexts: Vec<ContextRecord>,
}

impl TrackedEvent {
    /// Renders the envelope as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `DslError::Serialization` if the payload cannot be rendered.
    pub fn to_json(&self) -> Result<serde_json::Value, DslError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use chrono::TimeZone;
    use serde_json::json;

    struct Banner {
        fields: FieldMap,
    }

    impl Describing for Banner {
        const SCHEMA: SchemaId = schema::CLICK;

        fn fields(&self) -> FieldMap {
            self.fields.clone()
        }
    }

    #[test]
    fn test_build_tags_fields_with_fixed_schema() {
        // Arrange
        let mut fields = FieldMap::new();
        fields.insert("element_name", "hello_world");
        let banner = Banner { fields };

        // Act
        let record = banner.build();

        // Assert
        assert_eq!(record.schema(), &schema::CLICK);
        assert_eq!(record.data().len(), 1);
    }

    #[test]
    fn test_tracked_event_serializes_self_describing_shape() {
        // Arrange
        let mut fields = FieldMap::new();
        fields.insert("page_code", "Main");
        let tracked = TrackedEvent {
            event_id: Uuid::nil(),
            occurred_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
            event: SelfDescribing::new(schema::PAGE_VIEW, FieldMap::new()),
            contexts: vec![SelfDescribing::new(schema::COMMON_CONTEXT, fields)],
        };

        // Act
        let value = tracked.to_json().unwrap();

        // Assert
        assert_eq!(value["event"]["schema"], json!(schema::PAGE_VIEW.as_str()));
        assert_eq!(value["event"]["data"], json!({}));
        assert_eq!(value["contexts"][0]["data"], json!({ "page_code": "Main" }));
        assert_eq!(value["event_id"], json!(Uuid::nil().to_string()));
    }
}

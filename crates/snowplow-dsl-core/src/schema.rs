//! Schema identifiers for self-describing payloads.

use std::fmt;

use serde::Serialize;

/// Opaque schema URI naming the shape of a payload. Passed to the tracker
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SchemaId(&'static str);

impl SchemaId {
    /// Creates a schema identifier from a static URI.
    #[must_use]
    pub const fn from_static(uri: &'static str) -> Self {
        Self(uri)
    }

    /// Returns the schema URI.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Page-level context attached to every dispatched event.
pub const COMMON_CONTEXT: SchemaId =
    SchemaId::from_static("iglu:com.artemis/common/jsonschema/1-0-1");

/// Application-level context (landing page, referrer, uri).
pub const APP_COMMON_CONTEXT: SchemaId =
    SchemaId::from_static("iglu:com.artemis/app_common/jsonschema/1-0-1");

/// Page view event.
pub const PAGE_VIEW: SchemaId = SchemaId::from_static("iglu:com.artemis/page_view/jsonschema/1-0-0");

/// Click event.
pub const CLICK: SchemaId = SchemaId::from_static("iglu:com.artemis/click/jsonschema/1-0-0");

/// Impression event, shared by all impression variants.
pub const IMPRESSIONS: SchemaId =
    SchemaId::from_static("iglu:com.artemis/impressions/jsonschema/1-0-0");

//! Page view events.

use snowplow_dsl_core::field::FieldMap;
use snowplow_dsl_core::record::Describing;
use snowplow_dsl_core::schema::{self, SchemaId};

/// Builder for a page view event: a page shown or hidden, with optional
/// timings in milliseconds.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    fields: FieldMap,
}

impl PageView {
    /// Creates an empty page view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `view_type` (e.g. `"show"`, `"hide"`).
    pub fn view_type(&mut self, view_type: impl Into<String>) -> &mut Self {
        self.fields.insert("view_type", view_type.into());
        self
    }

    /// Sets `start_time`.
    pub fn start_time(&mut self, start_time: i64) -> &mut Self {
        self.fields.insert("start_time", start_time);
        self
    }

    /// Sets `end_time`.
    pub fn end_time(&mut self, end_time: i64) -> &mut Self {
        self.fields.insert("end_time", end_time);
        self
    }
}

impl Describing for PageView {
    const SCHEMA: SchemaId = schema::PAGE_VIEW;

    fn fields(&self) -> FieldMap {
        self.fields.clone()
    }
}

//! Context builders: page-level and application-level metadata attached
//! alongside an event.

use snowplow_dsl_core::field::{FieldMap, FieldValue};
use snowplow_dsl_core::record::Describing;
use snowplow_dsl_core::schema::{self, SchemaId};

/// Page-level context. Dispatch helpers populate `page_code` automatically.
#[derive(Debug, Clone, Default)]
pub struct CommonContext {
    fields: FieldMap,
}

impl CommonContext {
    /// Creates an empty common context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `page_code`.
    pub fn page_code(&mut self, page_code: impl Into<String>) -> &mut Self {
        self.fields.insert("page_code", page_code.into());
        self
    }

    /// Merges `pairs` directly into the context fields.
    pub fn extra<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.fields.insert(key, FieldValue::Text(value.into()));
        }
        self
    }
}

impl Describing for CommonContext {
    const SCHEMA: SchemaId = schema::COMMON_CONTEXT;

    fn fields(&self) -> FieldMap {
        self.fields.clone()
    }
}

/// Application-level context: where the user landed and came from.
#[derive(Debug, Clone, Default)]
pub struct AppCommonContext {
    fields: FieldMap,
}

impl AppCommonContext {
    /// Creates an empty app-common context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `landing_page`.
    pub fn landing_page(&mut self, landing_page: impl Into<String>) -> &mut Self {
        self.fields.insert("landing_page", landing_page.into());
        self
    }

    /// Sets `refer`.
    pub fn refer(&mut self, refer: impl Into<String>) -> &mut Self {
        self.fields.insert("refer", refer.into());
        self
    }

    /// Sets `uri`.
    pub fn uri(&mut self, uri: impl Into<String>) -> &mut Self {
        self.fields.insert("uri", uri.into());
        self
    }

    /// Merges `pairs` directly into the context fields.
    pub fn extra<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.fields.insert(key, FieldValue::Text(value.into()));
        }
        self
    }
}

impl Describing for AppCommonContext {
    const SCHEMA: SchemaId = schema::APP_COMMON_CONTEXT;

    fn fields(&self) -> FieldMap {
        self.fields.clone()
    }
}

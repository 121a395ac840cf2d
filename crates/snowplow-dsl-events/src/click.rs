//! Click events.

use snowplow_dsl_core::field::FieldMap;
use snowplow_dsl_core::record::Describing;
use snowplow_dsl_core::schema::{self, SchemaId};

use crate::extra::{self, Extra};

/// Builder for a click on a named element.
#[derive(Debug, Clone, Default)]
pub struct Click {
    fields: FieldMap,
}

impl Click {
    /// Creates an empty click.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `element_name`.
    pub fn element_name(&mut self, element_name: impl Into<String>) -> &mut Self {
        self.fields.insert("element_name", element_name.into());
        self
    }

    /// Sets `element_id`.
    pub fn element_id(&mut self, element_id: impl Into<String>) -> &mut Self {
        self.fields.insert("element_id", element_id.into());
        self
    }

    /// Sets `element_type`.
    pub fn element_type(&mut self, element_type: impl Into<String>) -> &mut Self {
        self.fields.insert("element_type", element_type.into());
        self
    }

    /// Sets `list_type`, for clicks on an element inside a list.
    pub fn list_type(&mut self, list_type: impl Into<String>) -> &mut Self {
        self.fields.insert("list_type", list_type.into());
        self
    }

    /// Replaces `extra` with `pairs`. No pairs leaves the field untouched.
    pub fn extra<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        extra::write(&mut self.fields, extra::collect(pairs));
        self
    }

    /// Replaces `extra` with the map `configure` fills in. An empty map
    /// leaves the field untouched.
    pub fn extra_with(&mut self, configure: impl FnOnce(&mut Extra)) -> &mut Self {
        extra::write_with(&mut self.fields, configure);
        self
    }
}

impl Describing for Click {
    const SCHEMA: SchemaId = schema::CLICK;

    fn fields(&self) -> FieldMap {
        self.fields.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_click_fields_serialize_with_extra() {
        // Arrange
        let mut click = Click::new();

        // Act
        click
            .element_name("hello_world")
            .element_id("2020")
            .element_type("word")
            .extra([("list_uri", "list"), ("list_name", "aaa")]);
        let record = click.build();

        // Assert
        assert_eq!(record.schema(), &schema::CLICK);
        assert_eq!(
            serde_json::to_value(record.data()).unwrap(),
            json!({
                "element_name": "hello_world",
                "element_id": "2020",
                "element_type": "word",
                "extra": { "list_uri": "list", "list_name": "aaa" }
            })
        );
    }

    #[test]
    fn test_empty_extra_is_a_no_op() {
        let mut click = Click::new();

        click.extra(Vec::<(String, String)>::new());
        click.extra_with(|_| {});

        assert!(!click.fields().contains_key("extra"));
    }

    #[test]
    fn test_empty_extra_keeps_previous_extra() {
        let mut click = Click::new();

        click.extra([("list_uri", "list")]);
        click.extra(Vec::<(String, String)>::new());

        let extra = click.fields().get("extra").cloned().unwrap();
        assert_eq!(extra.as_map().map(Extra::len), Some(1));
    }

    #[test]
    fn test_extra_accepts_a_map_and_replaces_previous_extra() {
        // Arrange
        let mut click = Click::new();
        click.extra([("stale", "value")]);
        let map = HashMap::from([("list_uri", "list"), ("list_name", "aaa")]);

        // Act
        click.extra(map);

        // Assert
        let fields = click.fields();
        let extra = fields.get("extra").and_then(|v| v.as_map()).unwrap();
        assert_eq!(extra.len(), 2);
        assert!(!extra.contains_key("stale"));
    }

    #[test]
    fn test_extra_with_builds_map_in_place() {
        let mut click = Click::new();

        click.extra_with(|extra| {
            extra.insert("list_uri".into(), "list".into());
            extra.insert("list_name".into(), "aaa".into());
        });

        let fields = click.fields();
        let extra = fields.get("extra").and_then(|v| v.as_map()).unwrap();
        assert_eq!(extra.get("list_name").map(String::as_str), Some("aaa"));
    }

    #[test]
    fn test_duplicate_extra_keys_keep_last_value() {
        let mut click = Click::new();

        click.extra([("k", "first"), ("k", "second")]);

        let fields = click.fields();
        let extra = fields.get("extra").and_then(|v| v.as_map()).unwrap();
        assert_eq!(extra.len(), 1);
        assert_eq!(extra.get("k").map(String::as_str), Some("second"));
    }
}

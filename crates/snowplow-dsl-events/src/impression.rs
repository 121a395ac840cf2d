//! Impression events: a list of items shown to the user.
//!
//! All variants share the impressions schema. `GoodsImpression` derives its
//! items from products; `SingleImpression` always carries exactly one item
//! and exposes that item's setters directly.

use snowplow_dsl_core::field::FieldMap;
use snowplow_dsl_core::record::Describing;
use snowplow_dsl_core::schema::{self, SchemaId};

use crate::extra::{self, Extra};

const LIST: &str = "list";

/// Display name given to every product item.
pub const GOODS_ELEMENT_NAME: &str = "ddd";

/// One listed entity inside an impression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpressionItem {
    fields: FieldMap,
}

impl ImpressionItem {
    /// Creates an empty item.
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

    /// Sets `element_position`.
    pub fn element_position(&mut self, element_position: i32) -> &mut Self {
        self.fields.insert("element_position", element_position);
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

    /// Replaces `extra` with the map `configure` fills in.
    pub fn extra_with(&mut self, configure: impl FnOnce(&mut Extra)) -> &mut Self {
        extra::write_with(&mut self.fields, configure);
        self
    }

    /// The item's fields.
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Consumes the item, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> FieldMap {
        self.fields
    }
}

/// A product shown in a goods impression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goods {
    /// Product identifier.
    pub v_id: String,
    /// Position of the product in the list.
    pub position: i32,
    /// Product-specific attributes.
    pub extra: Extra,
}

impl Goods {
    /// Creates a product with no extra attributes.
    #[must_use]
    pub fn new(v_id: impl Into<String>, position: i32) -> Self {
        Self {
            v_id: v_id.into(),
            position,
            extra: Extra::new(),
        }
    }

    /// Sets the product's extra attributes.
    #[must_use]
    pub fn with_extra<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extra = extra::collect(pairs);
        self
    }

    fn to_item(&self) -> ImpressionItem {
        let mut item = ImpressionItem::new();
        item.element_name(GOODS_ELEMENT_NAME)
            .element_id(self.v_id.clone())
            .element_position(self.position)
            .extra(self.extra.clone());
        item
    }
}

/// Builder for a generic impression.
#[derive(Debug, Clone, Default)]
pub struct Impression {
    fields: FieldMap,
}

impl Impression {
    /// Creates an empty impression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `list_type`.
    pub fn list_type(&mut self, list_type: impl Into<String>) -> &mut Self {
        self.fields.insert("list_type", list_type.into());
        self
    }

    /// Installs `items`, in order, under `list`.
    pub fn list(&mut self, items: impl IntoIterator<Item = ImpressionItem>) -> &mut Self {
        let items: Vec<FieldMap> = items.into_iter().map(ImpressionItem::into_fields).collect();
        self.fields.insert(LIST, items);
        self
    }
}

impl Describing for Impression {
    const SCHEMA: SchemaId = schema::IMPRESSIONS;

    fn fields(&self) -> FieldMap {
        self.fields.clone()
    }
}

/// Builder for an impression of a product list.
#[derive(Debug, Clone, Default)]
pub struct GoodsImpression {
    impression: Impression,
}

impl GoodsImpression {
    /// Creates an empty goods impression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `list_type`.
    pub fn list_type(&mut self, list_type: impl Into<String>) -> &mut Self {
        self.impression.list_type(list_type);
        self
    }

    /// Installs arbitrary items under `list`.
    pub fn list(&mut self, items: impl IntoIterator<Item = ImpressionItem>) -> &mut Self {
        self.impression.list(items);
        self
    }

    /// Installs one item per product under `list`, in input order.
    pub fn goods(&mut self, goods: &[Goods]) -> &mut Self {
        self.impression.list(goods.iter().map(Goods::to_item));
        self
    }
}

impl Describing for GoodsImpression {
    const SCHEMA: SchemaId = schema::IMPRESSIONS;

    fn fields(&self) -> FieldMap {
        self.impression.fields()
    }
}

/// Builder for an impression of exactly one item.
#[derive(Debug, Clone, Default)]
pub struct SingleImpression {
    impression: Impression,
    item: ImpressionItem,
}

impl SingleImpression {
    /// Creates a single impression holding one empty item.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `list_type`.
    pub fn list_type(&mut self, list_type: impl Into<String>) -> &mut Self {
        self.impression.list_type(list_type);
        self
    }

    /// Sets the item's `element_name`.
    pub fn element_name(&mut self, element_name: impl Into<String>) -> &mut Self {
        self.item.element_name(element_name);
        self
    }

    /// Sets the item's `element_id`.
    pub fn element_id(&mut self, element_id: impl Into<String>) -> &mut Self {
        self.item.element_id(element_id);
        self
    }

    /// Sets the item's `element_type`.
    pub fn element_type(&mut self, element_type: impl Into<String>) -> &mut Self {
        self.item.element_type(element_type);
        self
    }

    /// Sets the item's `element_position`.
    pub fn element_position(&mut self, element_position: i32) -> &mut Self {
        self.item.element_position(element_position);
        self
    }

    /// Replaces the item's `extra` with `pairs`.
    pub fn extra<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.item.extra(pairs);
        self
    }

    /// Replaces the item's `extra` with the map `configure` fills in.
    pub fn extra_with(&mut self, configure: impl FnOnce(&mut Extra)) -> &mut Self {
        self.item.extra_with(configure);
        self
    }
}

impl Describing for SingleImpression {
    const SCHEMA: SchemaId = schema::IMPRESSIONS;

    fn fields(&self) -> FieldMap {
        let mut fields = self.impression.fields();
        fields.insert(LIST, vec![self.item.fields().clone()]);
        fields
    }
}

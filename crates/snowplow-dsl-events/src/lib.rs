//! Snowplow DSL — event and context field builders.
//!
//! Each builder accumulates named fields into a `FieldMap` and freezes them,
//! together with its fixed schema, through `Describing::build`.

pub mod click;
pub mod context;
mod extra;
pub mod impression;
pub mod page_view;

pub use click::Click;
pub use context::{AppCommonContext, CommonContext};
pub use extra::Extra;
pub use impression::{Goods, GoodsImpression, Impression, ImpressionItem, SingleImpression};
pub use page_view::PageView;

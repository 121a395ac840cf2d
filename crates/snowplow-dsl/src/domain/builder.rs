//! Maps each `EventKind` to the builder that configures it.

use snowplow_dsl_core::kind::EventKind;
use snowplow_dsl_core::record::{Describing, EventRecord};
use snowplow_dsl_events::{Click, GoodsImpression, Impression, PageView, SingleImpression};

/// A builder that produces the event record of one `EventKind`.
pub trait KindBuilder: Describing + Default {
    /// The kind this builder produces.
    const KIND: EventKind;

    /// Wraps the builder for runtime-selected dispatch.
    fn into_event_builder(self) -> EventBuilder;
}

impl KindBuilder for PageView {
    const KIND: EventKind = EventKind::PageView;

    fn into_event_builder(self) -> EventBuilder {
        EventBuilder::PageView(self)
    }
}

impl KindBuilder for Click {
    const KIND: EventKind = EventKind::Click;

    fn into_event_builder(self) -> EventBuilder {
        EventBuilder::Click(self)
    }
}

impl KindBuilder for Impression {
    const KIND: EventKind = EventKind::Impression;

    fn into_event_builder(self) -> EventBuilder {
        EventBuilder::Impression(self)
    }
}

impl KindBuilder for GoodsImpression {
    const KIND: EventKind = EventKind::GoodsImpression;

    fn into_event_builder(self) -> EventBuilder {
        EventBuilder::GoodsImpression(self)
    }
}

impl KindBuilder for SingleImpression {
    const KIND: EventKind = EventKind::SingleImpression;

    fn into_event_builder(self) -> EventBuilder {
        EventBuilder::SingleImpression(self)
    }
}

/// A builder of any recognized kind, for callers that choose the kind at
/// runtime.
#[derive(Debug, Clone)]
pub enum EventBuilder {
    /// Page view builder.
    PageView(PageView),
    /// Click builder.
    Click(Click),
    /// Generic impression builder.
    Impression(Impression),
    /// Product list impression builder.
    GoodsImpression(GoodsImpression),
    /// Single item impression builder.
    SingleImpression(SingleImpression),
}

impl EventBuilder {
    /// Creates the empty builder for `kind`.
    #[must_use]
    pub fn for_kind(kind: EventKind) -> Self {
        match kind {
            EventKind::PageView => PageView::new().into_event_builder(),
            EventKind::Click => Click::new().into_event_builder(),
            EventKind::Impression => Impression::new().into_event_builder(),
            EventKind::GoodsImpression => GoodsImpression::new().into_event_builder(),
            EventKind::SingleImpression => SingleImpression::new().into_event_builder(),
        }
    }

    /// The kind of the wrapped builder.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PageView(_) => EventKind::PageView,
            Self::Click(_) => EventKind::Click,
            Self::Impression(_) => EventKind::Impression,
            Self::GoodsImpression(_) => EventKind::GoodsImpression,
            Self::SingleImpression(_) => EventKind::SingleImpression,
        }
    }

    /// Freezes the wrapped builder into its event record.
    #[must_use]
    pub fn build(&self) -> EventRecord {
        match self {
            Self::PageView(builder) => builder.build(),
            Self::Click(builder) => builder.build(),
            Self::Impression(builder) => builder.build(),
            Self::GoodsImpression(builder) => builder.build(),
            Self::SingleImpression(builder) => builder.build(),
        }
    }
}

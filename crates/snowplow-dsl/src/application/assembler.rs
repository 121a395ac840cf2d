//! The event assembler.
//!
//! A `Snowplow` collects context records in call order and exactly one event
//! record, then dispatches them through `track`. Each builder is configured
//! through a `&mut` borrow and frozen into an immutable record as soon as the
//! configuration function returns.

use snowplow_dsl_core::clock::Clock;
use snowplow_dsl_core::error::DslError;
use snowplow_dsl_core::event_id::EventIdGenerator;
use snowplow_dsl_core::kind::EventKind;
use snowplow_dsl_core::record::{ContextRecord, Describing, EventRecord, TrackedEvent};
use snowplow_dsl_core::tracker::Tracker;
use snowplow_dsl_events::{
    AppCommonContext, Click, CommonContext, GoodsImpression, Impression, PageView,
    SingleImpression,
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::builder::{EventBuilder, KindBuilder};

/// Assembles one self-describing event and its contexts.
#[derive(Debug, Default)]
pub struct Snowplow {
    event: Option<(EventKind, EventRecord)>,
    conflict: Option<EventKind>,
    contexts: Vec<ContextRecord>,
}

impl Snowplow {
    /// Creates an assembler with no event and no contexts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page-level context.
    pub fn common(&mut self, configure: impl FnOnce(&mut CommonContext)) -> &mut Self {
        self.context(configure)
    }

    /// Appends an application-level context.
    pub fn app_common(&mut self, configure: impl FnOnce(&mut AppCommonContext)) -> &mut Self {
        self.context(configure)
    }

    /// Appends a context built by any `Describing` builder. Contexts are
    /// never deduplicated.
    pub fn context<C>(&mut self, configure: impl FnOnce(&mut C)) -> &mut Self
    where
        C: Describing + Default,
    {
        let mut builder = C::default();
        configure(&mut builder);
        self.contexts.push(builder.build());
        self
    }

    /// Sets the event to a page view.
    pub fn page_view(&mut self, configure: impl FnOnce(&mut PageView)) -> &mut Self {
        self.event(configure)
    }

    /// Sets the event to a click.
    pub fn click(&mut self, configure: impl FnOnce(&mut Click)) -> &mut Self {
        self.event(configure)
    }

    /// Sets the event to a generic impression.
    pub fn impression(&mut self, configure: impl FnOnce(&mut Impression)) -> &mut Self {
        self.event(configure)
    }

    /// Sets the event to a product list impression.
    pub fn goods_impression(&mut self, configure: impl FnOnce(&mut GoodsImpression)) -> &mut Self {
        self.event(configure)
    }

    /// Sets the event to a single item impression.
    pub fn single_impression(
        &mut self,
        configure: impl FnOnce(&mut SingleImpression),
    ) -> &mut Self {
        self.event(configure)
    }

    /// Sets the event from the builder type `B`.
    pub fn event<B: KindBuilder>(&mut self, configure: impl FnOnce(&mut B)) -> &mut Self {
        let mut builder = B::default();
        configure(&mut builder);
        self.set_event(B::KIND, builder.build());
        self
    }

    /// Sets the event from an already configured runtime-selected builder.
    pub fn event_builder(&mut self, builder: &EventBuilder) -> &mut Self {
        self.set_event(builder.kind(), builder.build());
        self
    }

    /// Only the first event is kept; any later one is remembered as a
    /// conflict and rejected at `track`.
    fn set_event(&mut self, kind: EventKind, record: EventRecord) {
        if self.event.is_some() {
            self.conflict.get_or_insert(kind);
            return;
        }
        self.event = Some((kind, record));
    }

    /// The configured event, if any.
    #[must_use]
    pub fn event_record(&self) -> Option<&EventRecord> {
        self.event.as_ref().map(|(_, record)| record)
    }

    /// Freezes the event and contexts, assigns a fresh event id and timestamp,
    /// and hands the result to `tracker`. Returns the assigned event id.
    ///
    /// # Errors
    ///
    /// Returns `DslError::MissingEvent` if no event was configured,
    /// `DslError::DuplicateEvent` if more than one was, and whatever error the
    /// tracker reports. The tracker is not called in the first two cases.
    pub fn track(
        self,
        clock: &dyn Clock,
        event_ids: &dyn EventIdGenerator,
        tracker: &dyn Tracker,
    ) -> Result<Uuid, DslError> {
        let Some((kind, event)) = self.event else {
            warn!("rejecting dispatch without an event");
            return Err(DslError::MissingEvent);
        };

        if let Some(second) = self.conflict {
            warn!(first = %kind, second = %second, "rejecting dispatch with more than one event");
            return Err(DslError::DuplicateEvent {
                first: kind,
                second,
            });
        }

        let tracked = TrackedEvent {
            event_id: event_ids.next_id(),
            occurred_at: clock.now(),
            event,
            contexts: self.contexts,
        };
        let event_id = tracked.event_id;

        debug!(
            event_id = %event_id,
            kind = %kind,
            schema = %tracked.event.schema(),
            contexts = tracked.contexts.len(),
            "tracking self-describing event"
        );

        tracker.track(tracked)?;

        Ok(event_id)
    }
}

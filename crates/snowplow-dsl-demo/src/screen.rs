//! The demo screen.
//!
//! Mirrors what a single-page app reports over one visit: the item and
//! product impressions shown on creation, a page view on resume, a click on
//! the greeting, and a page view with timings on pause.

use snowplow_dsl::dispatch;
use snowplow_dsl_core::clock::Clock;
use snowplow_dsl_core::error::DslError;
use snowplow_dsl_core::event_id::EventIdGenerator;
use snowplow_dsl_core::tracker::Tracker;
use snowplow_dsl_events::{Click, Goods, GoodsImpression, PageView, SingleImpression};
use tracing::info;
use uuid::Uuid;

const GREETING: &str = "hello_world";
const GREETING_ID: &str = "2020";
const GREETING_TYPE: &str = "word";

/// A screen that tracks through the given collaborators.
pub struct MainScreen<'a> {
    page_code: String,
    clock: &'a dyn Clock,
    event_ids: &'a dyn EventIdGenerator,
    tracker: &'a dyn Tracker,
}

impl<'a> MainScreen<'a> {
    /// Creates a screen reporting as `page_code`.
    #[must_use]
    pub fn new(
        page_code: impl Into<String>,
        clock: &'a dyn Clock,
        event_ids: &'a dyn EventIdGenerator,
        tracker: &'a dyn Tracker,
    ) -> Self {
        Self {
            page_code: page_code.into(),
            clock,
            event_ids,
            tracker,
        }
    }

    /// Tracks the impressions shown when the screen is built: the greeting
    /// item, then the product shelf.
    ///
    /// # Errors
    ///
    /// Returns the first tracking error.
    pub fn on_create(&self, shelf: &[Goods]) -> Result<Vec<Uuid>, DslError> {
        let greeting = dispatch::<SingleImpression>(
            &self.page_code,
            |impression| {
                impression
                    .element_name(GREETING)
                    .element_id(GREETING_ID)
                    .element_type(GREETING_TYPE)
                    .element_position(55)
                    .list_type("/ddd")
                    .extra([("list_uri", "list"), ("list_name", "aaa")]);
            },
            self.clock,
            self.event_ids,
            self.tracker,
        )?;

        let goods = dispatch::<GoodsImpression>(
            &self.page_code,
            |impression| {
                impression.list_type("/goods").goods(shelf);
            },
            self.clock,
            self.event_ids,
            self.tracker,
        )?;

        Ok(vec![greeting, goods])
    }

    /// Tracks the page being shown. Returns the event id and the resume
    /// timestamp in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns the tracking error, if any.
    pub fn on_resume(&self) -> Result<(Uuid, i64), DslError> {
        let resumed_at = self.clock.now_millis();
        let event_id = dispatch::<PageView>(
            &self.page_code,
            |page_view| {
                page_view.view_type("show");
            },
            self.clock,
            self.event_ids,
            self.tracker,
        )?;
        Ok((event_id, resumed_at))
    }

    /// Tracks a click on the greeting.
    ///
    /// # Errors
    ///
    /// Returns the tracking error, if any.
    pub fn on_greeting_click(&self) -> Result<Uuid, DslError> {
        dispatch::<Click>(
            &self.page_code,
            |click| {
                click
                    .element_name(GREETING)
                    .element_id(GREETING_ID)
                    .element_type(GREETING_TYPE)
                    .extra_with(|extra| {
                        extra.insert("list_uri".to_owned(), "list".to_owned());
                        extra.insert("list_name".to_owned(), "aaa".to_owned());
                    });
            },
            self.clock,
            self.event_ids,
            self.tracker,
        )
    }

    /// Tracks the page being hidden, with the time it was visible.
    ///
    /// # Errors
    ///
    /// Returns the tracking error, if any.
    pub fn on_pause(&self, resumed_at: i64) -> Result<Uuid, DslError> {
        let paused_at = self.clock.now_millis();
        dispatch::<PageView>(
            &self.page_code,
            |page_view| {
                page_view
                    .view_type("hide")
                    .start_time(resumed_at)
                    .end_time(paused_at);
            },
            self.clock,
            self.event_ids,
            self.tracker,
        )
    }

    /// Runs one visit: create, resume, click, pause. Returns the event ids in
    /// dispatch order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first tracking error.
    pub fn run_visit(&self, shelf: &[Goods]) -> Result<Vec<Uuid>, DslError> {
        let mut event_ids = self.on_create(shelf)?;
        let (shown, resumed_at) = self.on_resume()?;
        event_ids.push(shown);
        event_ids.push(self.on_greeting_click()?);
        event_ids.push(self.on_pause(resumed_at)?);

        info!(page_code = %self.page_code, events = event_ids.len(), "visit tracked");
        Ok(event_ids)
    }
}

//! Dispatch entry points.
//!
//! `dispatch` and `dispatch_kind` attach the default contexts for a page
//! (a common context carrying the page code, then an empty app-common
//! context) before running the caller's configuration. `assemble` leaves
//! context selection and ordering to the caller.

use snowplow_dsl_core::clock::Clock;
use snowplow_dsl_core::error::DslError;
use snowplow_dsl_core::event_id::EventIdGenerator;
use snowplow_dsl_core::kind::EventKind;
use snowplow_dsl_core::tracker::Tracker;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::application::assembler::Snowplow;
use crate::domain::builder::{EventBuilder, KindBuilder};

fn with_page_contexts(page_code: &str) -> Snowplow {
    let mut snowplow = Snowplow::new();
    snowplow
        .common(|common| {
            common.page_code(page_code);
        })
        .app_common(|_| {});
    snowplow
}

/// Tracks one event of builder type `B` on page `page_code`.
///
/// ```ignore
/// dispatch::<PageView>("Main", |page_view| {
///     page_view.view_type("show");
/// }, &clock, &event_ids, &tracker)?;
/// ```
///
/// # Errors
///
/// Returns whatever error the tracker reports.
#[instrument(skip(configure, clock, event_ids, tracker), fields(kind = %B::KIND))]
pub fn dispatch<B: KindBuilder>(
    page_code: &str,
    configure: impl FnOnce(&mut B),
    clock: &dyn Clock,
    event_ids: &dyn EventIdGenerator,
    tracker: &dyn Tracker,
) -> Result<Uuid, DslError> {
    let mut snowplow = with_page_contexts(page_code);
    snowplow.event(configure);
    snowplow.track(clock, event_ids, tracker)
}

/// Tracks one event whose kind is named at runtime (`"click"`,
/// `"PageView"`, ...). The configuration receives the matching
/// `EventBuilder` variant.
///
/// # Errors
///
/// Returns `DslError::UnsupportedKind` without contacting the tracker if
/// `kind` names no recognized kind, `DslError::KindMismatch` if `configure`
/// replaced the builder with one of another kind, otherwise whatever the
/// tracker reports.
#[instrument(skip(configure, clock, event_ids, tracker))]
pub fn dispatch_kind(
    kind: &str,
    page_code: &str,
    configure: impl FnOnce(&mut EventBuilder),
    clock: &dyn Clock,
    event_ids: &dyn EventIdGenerator,
    tracker: &dyn Tracker,
) -> Result<Uuid, DslError> {
    let kind: EventKind = kind.parse().inspect_err(|err| {
        warn!(error = %err, "rejecting dispatch");
    })?;

    let mut builder = EventBuilder::for_kind(kind);
    configure(&mut builder);

    let configured = builder.kind();
    if configured != kind {
        warn!(requested = %kind, configured = %configured, "rejecting dispatch");
        return Err(DslError::KindMismatch {
            requested: kind,
            configured,
        });
    }

    let mut snowplow = with_page_contexts(page_code);
    snowplow.event_builder(&builder);
    snowplow.track(clock, event_ids, tracker)
}

/// Runs `configure` against a fresh assembler and tracks the result.
///
/// # Errors
///
/// Returns `DslError::MissingEvent` or `DslError::DuplicateEvent` if the
/// configuration set no event or more than one, otherwise whatever the
/// tracker reports.
pub fn assemble(
    configure: impl FnOnce(&mut Snowplow),
    clock: &dyn Clock,
    event_ids: &dyn EventIdGenerator,
    tracker: &dyn Tracker,
) -> Result<Uuid, DslError> {
    let mut snowplow = Snowplow::new();
    configure(&mut snowplow);
    snowplow.track(clock, event_ids, tracker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowplow_dsl_core::schema;
    use snowplow_dsl_events::{Click, PageView};
    use snowplow_dsl_test_support::{FixedClock, RecordingTracker, SequenceEventIds};

    #[test]
    fn test_dispatch_attaches_default_page_contexts() {
        // Arrange
        let tracker = RecordingTracker::new();

        // Act
        dispatch::<PageView>(
            "Main",
            |page_view| {
                page_view.view_type("show");
            },
            &FixedClock::standard(),
            &SequenceEventIds::counting(1),
            &tracker,
        )
        .unwrap();

        // Assert
        let tracked = tracker.tracked_events();
        let contexts = &tracked[0].contexts;
        assert_eq!(contexts.len(), 2);
        assert_eq!(contexts[0].schema(), &schema::COMMON_CONTEXT);
        assert_eq!(
            contexts[0].data().get("page_code").and_then(|v| v.as_text()),
            Some("Main")
        );
        assert_eq!(contexts[1].schema(), &schema::APP_COMMON_CONTEXT);
        assert!(contexts[1].data().is_empty());
    }

    #[test]
    fn test_dispatch_kind_routes_to_matching_builder() {
        let tracker = RecordingTracker::new();

        dispatch_kind(
            "click",
            "Main",
            |builder| {
                if let EventBuilder::Click(click) = builder {
                    click.element_name("hello_world");
                }
            },
            &FixedClock::standard(),
            &SequenceEventIds::counting(1),
            &tracker,
        )
        .unwrap();

        let event = &tracker.tracked_events()[0].event;
        assert_eq!(event.schema(), &schema::CLICK);
        assert!(event.data().contains_key("element_name"));
    }

    #[test]
    fn test_dispatch_kind_rejects_unknown_kind_without_tracking() {
        // Arrange
        let tracker = RecordingTracker::new();
        let mut configured = false;

        // Act
        let result = dispatch_kind(
            "banner",
            "Main",
            |_| configured = true,
            &FixedClock::standard(),
            &SequenceEventIds::new(vec![]),
            &tracker,
        );

        // Assert
        assert!(matches!(result, Err(DslError::UnsupportedKind(ref kind)) if kind == "banner"));
        assert!(!configured);
        assert_eq!(tracker.call_count(), 0);
    }

    #[test]
    fn test_dispatch_kind_rejects_swapped_builder_without_tracking() {
        // Arrange
        let tracker = RecordingTracker::new();

        // Act
        let result = dispatch_kind(
            "page_view",
            "Main",
            |builder| *builder = EventBuilder::for_kind(EventKind::Click),
            &FixedClock::standard(),
            &SequenceEventIds::new(vec![]),
            &tracker,
        );

        // Assert
        match result {
            Err(DslError::KindMismatch {
                requested,
                configured,
            }) => {
                assert_eq!(requested, EventKind::PageView);
                assert_eq!(configured, EventKind::Click);
            }
            other => panic!("expected KindMismatch, got {other:?}"),
        }
        assert_eq!(tracker.call_count(), 0);
    }

    #[test]
    fn test_assemble_leaves_contexts_to_caller() {
        let tracker = RecordingTracker::new();

        assemble(
            |snowplow| {
                snowplow.click(|click: &mut Click| {
                    click.element_id("2020");
                });
            },
            &FixedClock::standard(),
            &SequenceEventIds::counting(1),
            &tracker,
        )
        .unwrap();

        assert!(tracker.tracked_events()[0].contexts.is_empty());
    }
}

//! Snowplow DSL demo entry point.

use snowplow_dsl_core::clock::SystemClock;
use snowplow_dsl_core::event_id::RandomEventIds;
use snowplow_dsl_demo::config::DemoConfig;
use snowplow_dsl_demo::error::AppError;
use snowplow_dsl_demo::logging_tracker::LoggingTracker;
use snowplow_dsl_demo::screen::MainScreen;
use snowplow_dsl_events::Goods;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = DemoConfig::from_env()?;
    tracing::info!(
        namespace = %config.namespace,
        app_id = %config.app_id,
        "Starting Snowplow DSL demo"
    );

    let clock = SystemClock;
    let event_ids = RandomEventIds;
    let tracker = LoggingTracker::from_config(&config);
    let screen = MainScreen::new(config.page_code.clone(), &clock, &event_ids, &tracker);

    let shelf = [
        Goods::new("v-1001", 0).with_extra([("price", "12.50")]),
        Goods::new("v-1002", 1),
    ];
    let tracked = screen.run_visit(&shelf)?;

    tracing::info!(events = tracked.len(), "Demo finished");

    Ok(())
}

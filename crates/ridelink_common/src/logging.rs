//! Logging utilities for the RideLink backend.
//!
//! Provides a single place to initialize the tracing subscriber so the binary
//! and the tests configure logging the same way.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` still wins when set; the level argument only supplies the
/// default directive for this workspace's crates.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("ridelink={}", level).parse().unwrap());

    // try_init so tests that initialize more than once do not panic
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

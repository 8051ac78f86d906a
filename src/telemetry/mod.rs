//! Logging setup for TravelBuddy
//!
//! `tracing` events go to stderr so answers on stdout stay clean.
//! `RUST_LOG` always wins over flags and config.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Verbosity;

/// Filter directive for a verbosity level; `Normal` uses the configured one
pub fn filter_for(verbosity: Verbosity, configured: &str) -> String {
    match verbosity {
        Verbosity::Quiet => "travelbuddy=error".to_string(),
        Verbosity::Normal => configured.to_string(),
        Verbosity::Verbose => "travelbuddy=info".to_string(),
        Verbosity::VeryVerbose => "travelbuddy=debug".to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: Verbosity, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity, configured)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

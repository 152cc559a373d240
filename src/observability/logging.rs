//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate throughout; this module only installs a subscriber
//! - `RUST_LOG` wins over the default directive
//! - Safe to call more than once (later calls are ignored)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to `default_filter`
/// (e.g. `"sassy=debug,tower_http=debug"`).
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! cache + http subsystems produce:
//!     → tracing events (discovery, recompiles, failures)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;

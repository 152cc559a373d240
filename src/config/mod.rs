//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! SassyConfig (builder or TOML via loader.rs)
//!     → validation.rs (source dir checks, mount normalization)
//!     → frozen inside Sassy at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the middleware is built
//! - All fields have defaults to allow minimal configs
//! - `max_age` is clamped rather than rejected

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_config;
pub use schema::{clamp_max_age, OutputStyle, SassyConfig, ONE_DAY_SECS, ONE_YEAR_SECS};

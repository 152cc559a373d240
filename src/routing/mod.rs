//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → matcher.rs (mount prefix + segment allow-list)
//!     → Return: logical name or no match (passthrough)
//! ```
//!
//! # Design Decisions
//! - Matcher compiled at construction, immutable at runtime
//! - Deterministic: same path always yields the same name

pub mod matcher;

pub use matcher::MountMatcher;

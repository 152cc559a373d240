//! Compiled-artifact cache.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     source dir
//!     → store.rs (scan *.sass / *.scss, compile each)
//!     → entry.rs (StylesheetEntry per file, frozen set)
//!
//! Per request:
//!     logical name
//!     → store.rs (exact lookup)
//!     → entry.rs (stat source, recompile if newer, swap snapshot)
//!     → Artifact (css + fingerprint)
//! ```
//!
//! # Design Decisions
//! - Lazy per-request staleness checks; no file watcher
//! - Snapshots are immutable and swapped atomically; readers never lock
//! - Redundant concurrent recompiles are tolerated since compiling is pure

pub mod entry;
pub mod fingerprint;
pub mod store;

pub use entry::{Artifact, StylesheetEntry};
pub use fingerprint::fingerprint;
pub use store::{ArtifactCache, SOURCE_EXTENSIONS};

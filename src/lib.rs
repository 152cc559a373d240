//! On-demand Sass compilation middleware for Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ ┌──────────────┐   no match   ┌──────────────┐
//!                     │ http::guard  │─────────────▶│ next handler │
//!                     │ (routing)    │              └──────────────┘
//!                     └──────┬───────┘
//!                            │ logical name
//!                            ▼
//!                     ┌──────────────┐   stale?   ┌──────────────┐
//!                     │    cache     │───────────▶│   compiler   │
//!                     │ (snapshots)  │◀───────────│   (grass)    │
//!                     └──────┬───────┘            └──────────────┘
//!                            │ css + etag
//!     Client Response        ▼
//!     ◀────────────── http::response (Cache-Control, ETag, 304)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use axum::{middleware, routing::get, Router};
//! use sassy::{sassy_middleware, Sassy, SassyConfig};
//!
//! # fn build() -> Result<Router, sassy::SassyError> {
//! let sassy = Sassy::new("./styles", SassyConfig::default().with_mount("/css"))?;
//! let app: Router = Router::new()
//!     .route("/", get(|| async { "hello" }))
//!     .layer(middleware::from_fn_with_state(sassy, sassy_middleware));
//! # Ok(app)
//! # }
//! ```

// Core subsystems
pub mod cache;
pub mod compiler;
pub mod config;
pub mod error;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod observability;

pub use cache::{Artifact, ArtifactCache};
pub use compiler::{GrassCompiler, StylesheetCompiler};
pub use config::{OutputStyle, SassyConfig};
pub use error::{CompileError, ConfigError, SassyError};
pub use http::{sassy_middleware, Sassy, StylesheetServer};

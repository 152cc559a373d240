//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Request
//!     → middleware/stylesheet.rs (split into parts)
//!     → guard.rs (mount match, method filter, name extraction)
//!         no match → next handler (passthrough)
//!     → cache (resolve, maybe recompile)
//!     → response.rs (headers, freshness, 200/304/404/405/500)
//!     → Send to client
//! ```

pub mod guard;
pub mod middleware;
pub mod response;
pub mod server;

pub use guard::Sassy;
pub use middleware::sassy_middleware;
pub use server::StylesheetServer;

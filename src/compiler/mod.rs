//! Stylesheet compilation.
//!
//! # Data Flow
//! ```text
//! source path
//!     → StylesheetCompiler::compile (opaque, synchronous)
//!     → compiled CSS text | CompileError
//! ```
//!
//! # Design Decisions
//! - The compiler is a trait object so hosts and tests can substitute their own
//! - Compilation must be a pure function of the source content

pub mod sass;

use std::path::Path;

use crate::error::CompileError;

pub use sass::GrassCompiler;

/// Compiles a single stylesheet source file into CSS.
pub trait StylesheetCompiler: Send + Sync + std::fmt::Debug {
    /// Compile the file at `path`.
    fn compile(&self, path: &Path) -> Result<String, CompileError>;
}

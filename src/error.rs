//! Error types.
//!
//! # Design Decisions
//! - Construction errors (`ConfigError`, `CompileError` during discovery) abort setup
//! - Request-time errors never touch the cached snapshot
//! - An unknown stylesheet name is not an error; `resolve` returns `None`

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while building or loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("source directory path is required")]
    MissingSource,

    #[error("source directory {} does not exist", .0.display())]
    SourceNotFound(PathBuf),

    #[error("source path {} is a file, not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("mount {0:?} must be empty or start with '/'")]
    InvalidMount(String),

    #[error(
        "stylesheet {name:?} has two sources: {} and {}",
        first.display(),
        second.display()
    )]
    DuplicateStylesheet {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Error raised when a stylesheet cannot be produced from its source.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The source could not be read or stat'ed (including removal after discovery).
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compiler rejected the source.
    #[error("failed to compile {}: {message}", path.display())]
    Sass { path: PathBuf, message: String },
}

impl CompileError {
    /// Path of the source that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CompileError::Read { path, .. } | CompileError::Sass { path, .. } => path,
        }
    }
}

/// Error returned when constructing the middleware.
#[derive(Debug, Error)]
pub enum SassyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

//! Construction-time validation.
//!
//! # Responsibilities
//! - Check the source directory exists and is a directory
//! - Normalize and check the mount prefix
//!
//! # Design Decisions
//! - Runs once before any stylesheet is compiled
//! - Fails fast on the first problem; the middleware must not be installed

use std::path::Path;

use crate::error::ConfigError;

/// Validate the stylesheet source directory.
pub fn validate_source_dir(src: &Path) -> Result<(), ConfigError> {
    if src.as_os_str().is_empty() {
        return Err(ConfigError::MissingSource);
    }
    if !src.exists() {
        return Err(ConfigError::SourceNotFound(src.to_path_buf()));
    }
    if !src.is_dir() {
        return Err(ConfigError::NotADirectory(src.to_path_buf()));
    }
    Ok(())
}

/// Normalize a mount prefix: trailing slashes are dropped, so "/" and "" are
/// equivalent. A non-empty mount must begin with '/'.
pub fn normalize_mount(mount: &str) -> Result<String, ConfigError> {
    let trimmed = mount.trim_end_matches('/');
    if !trimmed.is_empty() && !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidMount(mount.to_string()));
    }
    Ok(trimmed.to_string())
}

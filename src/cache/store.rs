//! The artifact cache: discovery at startup and per-request resolution.
//!
//! # Responsibilities
//! - Enumerate the source directory once (non-recursive)
//! - Compile every stylesheet eagerly; any failure aborts construction
//! - Resolve logical names, recompiling entries whose source is newer
//!
//! # Design Decisions
//! - The entry set is frozen after discovery; no locking on lookups
//! - Staleness is the source file's own mtime only (imports are not tracked)
//! - Both Sass syntaxes are recognized; the compiler picks one by extension
//! - Two sources with the same logical name (`one.sass`, `one.scss`) are rejected

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::cache::entry::{Artifact, StylesheetEntry};
use crate::compiler::StylesheetCompiler;
use crate::config::validation::validate_source_dir;
use crate::error::{CompileError, ConfigError, SassyError};
use crate::observability::metrics;

/// Extensions of recognized stylesheet sources (indented and SCSS syntax).
pub const SOURCE_EXTENSIONS: &[&str] = &["sass", "scss"];

/// Compiled stylesheets keyed by logical name.
#[derive(Debug)]
pub struct ArtifactCache {
    entries: HashMap<String, StylesheetEntry>,
    compiler: Arc<dyn StylesheetCompiler>,
}

impl ArtifactCache {
    /// Scan `src` and compile every stylesheet in it.
    pub fn discover(src: &Path, compiler: Arc<dyn StylesheetCompiler>) -> Result<Self, SassyError> {
        validate_source_dir(src)?;
        let src = fs::canonicalize(src).map_err(ConfigError::Io)?;

        let mut entries: HashMap<String, StylesheetEntry> = HashMap::new();
        for dir_entry in fs::read_dir(&src).map_err(ConfigError::Io)? {
            let path = dir_entry.map_err(ConfigError::Io)?.path();
            let Some(name) = logical_name(&path) else {
                continue;
            };
            if !path.is_file() {
                continue;
            }

            if let Some(existing) = entries.get(&name) {
                return Err(ConfigError::DuplicateStylesheet {
                    name,
                    first: existing.source_path().to_path_buf(),
                    second: path,
                }
                .into());
            }

            let entry = StylesheetEntry::compile(name.clone(), path, compiler.as_ref())?;
            tracing::info!(
                name = %name,
                path = %entry.source_path().display(),
                "Compiled stylesheet"
            );
            entries.insert(name, entry);
        }

        tracing::info!(
            source = %src.display(),
            count = entries.len(),
            "Stylesheet discovery complete"
        );
        metrics::record_cache_entries(entries.len());

        Ok(Self { entries, compiler })
    }

    /// Look up `name`, refreshing it if its source changed.
    ///
    /// Returns `Ok(None)` for names that were never discovered.
    pub fn resolve(&self, name: &str) -> Result<Option<Arc<Artifact>>, CompileError> {
        match self.entries.get(name) {
            Some(entry) => entry.refresh(self.compiler.as_ref()).map(Some),
            None => Ok(None),
        }
    }

    /// Registered logical names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Logical name for a source path, or `None` if it is not a servable stylesheet.
fn logical_name(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?;
    if !SOURCE_EXTENSIONS.contains(&extension) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

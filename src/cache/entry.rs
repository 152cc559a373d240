//! A single registered stylesheet and its current compiled snapshot.
//!
//! # Design Decisions
//! - Compiled text, fingerprint and source timestamp live in one immutable
//!   `Artifact`, swapped atomically as a unit
//! - A failed refresh never stores anything, so the last good snapshot survives
//! - Concurrent refreshes of the same entry may both compile; the last store wins

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Instant, SystemTime};

use arc_swap::ArcSwap;

use crate::cache::fingerprint::fingerprint;
use crate::compiler::StylesheetCompiler;
use crate::error::CompileError;
use crate::observability::metrics;

/// Compiled output of one source file at one modification time.
#[derive(Debug)]
pub struct Artifact {
    css: String,
    etag: String,
    source_modified: SystemTime,
}

impl Artifact {
    pub fn new(css: String, source_modified: SystemTime) -> Self {
        let etag = fingerprint(&css);
        Self {
            css,
            etag,
            source_modified,
        }
    }

    /// Compiled CSS.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Strong, quoted ETag of `css`.
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Source modification time the CSS was compiled from.
    pub fn source_modified(&self) -> SystemTime {
        self.source_modified
    }
}

/// One stylesheet discovered at startup.
#[derive(Debug)]
pub struct StylesheetEntry {
    name: String,
    source_path: PathBuf,
    current: ArcSwap<Artifact>,
}

impl StylesheetEntry {
    /// Compile `source_path` eagerly and register it under `name`.
    pub(crate) fn compile(
        name: String,
        source_path: PathBuf,
        compiler: &dyn StylesheetCompiler,
    ) -> Result<Self, CompileError> {
        let modified = source_modified(&source_path)?;
        let artifact = build(compiler, &source_path, modified)?;

        Ok(Self {
            name,
            source_path,
            current: ArcSwap::from_pointee(artifact),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Current snapshot, without checking the source.
    pub fn snapshot(&self) -> Arc<Artifact> {
        self.current.load_full()
    }

    /// Return a snapshot matching the source on disk, recompiling if the
    /// source is newer than the cached one.
    pub(crate) fn refresh(
        &self,
        compiler: &dyn StylesheetCompiler,
    ) -> Result<Arc<Artifact>, CompileError> {
        let current = self.current.load_full();
        let modified = source_modified(&self.source_path)?;

        if modified <= current.source_modified {
            tracing::trace!(name = %self.name, "Stylesheet cache hit");
            return Ok(current);
        }

        let artifact = Arc::new(build(compiler, &self.source_path, modified)?);
        self.current.store(Arc::clone(&artifact));

        tracing::info!(
            name = %self.name,
            path = %self.source_path.display(),
            etag = %artifact.etag,
            "Recompiled stale stylesheet"
        );
        Ok(artifact)
    }
}

fn source_modified(path: &Path) -> Result<SystemTime, CompileError> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| CompileError::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn build(
    compiler: &dyn StylesheetCompiler,
    path: &Path,
    modified: SystemTime,
) -> Result<Artifact, CompileError> {
    let started = Instant::now();
    match compiler.compile(path) {
        Ok(css) => {
            metrics::record_compile("ok", started);
            Ok(Artifact::new(css, modified))
        }
        Err(e) => {
            metrics::record_compile("error", started);
            Err(e)
        }
    }
}

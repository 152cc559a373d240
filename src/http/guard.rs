//! Request guard in front of the artifact cache.
//!
//! # Responsibilities
//! - Decide whether a request is ours (mount + path shape)
//! - Answer non-GET/HEAD methods directly
//! - Resolve the stylesheet and compose the cacheable response
//!
//! # Design Decisions
//! - Cache resolution runs on the blocking pool since it may stat and compile
//! - Compile and filesystem failures become 500, never stale content
//! - Unknown names are a plain 404 and are not logged as errors

use std::path::Path;
use std::sync::Arc;

use axum::http::{request::Parts, Method, StatusCode};
use axum::response::Response;

use crate::cache::ArtifactCache;
use crate::compiler::{GrassCompiler, StylesheetCompiler};
use crate::config::validation::normalize_mount;
use crate::config::{SassyConfig, ONE_YEAR_SECS};
use crate::error::SassyError;
use crate::http::response::{cache_control, method_response, status_response, stylesheet_response};
use crate::observability::metrics;
use crate::routing::MountMatcher;

/// Stylesheet middleware state: the matcher, the cache and the frozen options.
///
/// Cheap to clone; clones share one cache.
#[derive(Debug, Clone)]
pub struct Sassy {
    matcher: MountMatcher,
    cache: Arc<ArtifactCache>,
    max_age: u64,
    cache_control: Arc<str>,
}

impl Sassy {
    /// Discover and compile every stylesheet in `src` using the Sass compiler.
    pub fn new(src: impl AsRef<Path>, config: SassyConfig) -> Result<Self, SassyError> {
        let compiler = Arc::new(GrassCompiler::from_config(&config));
        Self::with_compiler(src, config, compiler)
    }

    /// Same as [`Sassy::new`] with a caller-supplied compiler.
    pub fn with_compiler(
        src: impl AsRef<Path>,
        config: SassyConfig,
        compiler: Arc<dyn StylesheetCompiler>,
    ) -> Result<Self, SassyError> {
        let mount = normalize_mount(&config.mount)?;
        let max_age = config.max_age.min(ONE_YEAR_SECS);
        let cache = ArtifactCache::discover(src.as_ref(), compiler)?;

        tracing::info!(
            mount = %mount,
            max_age,
            stylesheets = ?cache.names(),
            "Stylesheet middleware ready"
        );

        Ok(Self {
            matcher: MountMatcher::new(mount),
            cache: Arc::new(cache),
            max_age,
            cache_control: cache_control(max_age).into(),
        })
    }

    pub fn cache(&self) -> &ArtifactCache {
        &self.cache
    }

    pub fn mount(&self) -> &str {
        self.matcher.mount()
    }

    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    /// Handle a request, or return `None` to pass it through.
    pub async fn handle(&self, parts: &Parts) -> Option<Response> {
        let Some(name) = self.matcher.match_path(parts.uri.path()) else {
            tracing::trace!(path = %parts.uri.path(), "Not a stylesheet request");
            return None;
        };

        let response = if parts.method == Method::GET || parts.method == Method::HEAD {
            self.serve(name, parts).await
        } else {
            method_response(&parts.method).unwrap_or_else(|e| internal_error(&e))
        };

        metrics::record_request(response.status().as_u16());
        Some(response)
    }

    async fn serve(&self, name: &str, parts: &Parts) -> Response {
        let cache = Arc::clone(&self.cache);
        let key = name.to_string();
        let resolved = tokio::task::spawn_blocking(move || cache.resolve(&key)).await;

        match resolved {
            Ok(Ok(Some(artifact))) => {
                stylesheet_response(parts, &artifact, &self.cache_control)
                    .unwrap_or_else(|e| internal_error(&e))
            }
            Ok(Ok(None)) => {
                tracing::debug!(name = %name, "Unknown stylesheet");
                status_response(StatusCode::NOT_FOUND)
            }
            Ok(Err(e)) => {
                tracing::error!(name = %name, error = %e, "Stylesheet refresh failed");
                status_response(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Err(e) => internal_error(&e),
        }
    }
}

fn internal_error(error: &dyn std::error::Error) -> Response {
    tracing::error!(error = %error, "Failed to build stylesheet response");
    status_response(StatusCode::INTERNAL_SERVER_ERROR)
}

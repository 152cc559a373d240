//! Mount-scoped stylesheet path matching.
//!
//! # Responsibilities
//! - Match `<mount>/<name>.css` exactly (one segment under the mount)
//! - Reject segments containing disallowed characters
//! - Extract the logical name, which is never empty
//!
//! # Design Decisions
//! - Built once from config; no per-request pattern construction
//! - No regex: prefix strip plus a character allow-list
//! - Path matching is case-sensitive; the query string never participates

use axum::body::Body;
use axum::http::Request;

/// Suffix every served stylesheet URL carries.
pub const CSS_SUFFIX: &str = ".css";

/// Characters that may not appear in the stylesheet segment.
const DISALLOWED: &[char] = &['/', '<', '>', '^', '%'];

/// Matches stylesheet requests under a mount prefix.
#[derive(Debug, Clone)]
pub struct MountMatcher {
    /// Normalized mount ("" or "/prefix", no trailing slash).
    mount: String,
}

impl MountMatcher {
    /// Create a matcher for an already normalized mount.
    pub fn new(mount: impl Into<String>) -> Self {
        Self {
            mount: mount.into(),
        }
    }

    pub fn mount(&self) -> &str {
        &self.mount
    }

    /// Return the logical name if `path` addresses a stylesheet under the mount.
    pub fn match_path<'a>(&self, path: &'a str) -> Option<&'a str> {
        let segment = path.strip_prefix(self.mount.as_str())?.strip_prefix('/')?;
        if segment.contains(DISALLOWED) {
            return None;
        }
        segment
            .strip_suffix(CSS_SUFFIX)
            .filter(|name| !name.is_empty())
    }

    /// Return the logical name if the request addresses a stylesheet.
    pub fn match_request<'a>(&self, req: &'a Request<Body>) -> Option<&'a str> {
        self.match_path(req.uri().path())
    }
}

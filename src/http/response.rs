//! Response composition and conditional-GET freshness.
//!
//! # Responsibilities
//! - Build stylesheet responses (Cache-Control, Content-Type, ETag)
//! - Decide 304 vs 200 from the request's validators
//! - Build the bodiless method/status responses
//!
//! # Design Decisions
//! - ETags are strong; `If-None-Match` still compares weakly, as browsers send `W/`
//! - A request carrying `Cache-Control: no-cache` is never fresh
//! - HEAD gets GET's headers with an empty body

use axum::body::Body;
use axum::http::header::{
    ALLOW, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE, ETAG, IF_NONE_MATCH,
};
use axum::http::{request::Parts, HeaderMap, Method, StatusCode};
use axum::response::Response;

use crate::cache::Artifact;

/// Methods the middleware answers.
pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Content type of every served stylesheet.
pub const CSS_CONTENT_TYPE: &str = "text/css;charset=utf-8";

/// `Cache-Control` value for a clamped max-age.
pub fn cache_control(max_age: u64) -> String {
    format!("public, max-age={max_age}")
}

/// True if the request's validators match `etag`.
pub fn is_fresh(headers: &HeaderMap, etag: &str) -> bool {
    let Some(if_none_match) = headers.get(IF_NONE_MATCH).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let no_cache = headers
        .get(CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cc| {
            cc.split(',')
                .any(|directive| directive.trim().eq_ignore_ascii_case("no-cache"))
        });
    if no_cache {
        return false;
    }

    let if_none_match = if_none_match.trim();
    if if_none_match == "*" {
        return true;
    }

    let etag = strip_weak(etag);
    if_none_match
        .split(',')
        .any(|candidate| strip_weak(candidate.trim()) == etag)
}

fn strip_weak(tag: &str) -> &str {
    tag.strip_prefix("W/").unwrap_or(tag)
}

/// Build the response for a resolved stylesheet.
pub fn stylesheet_response(
    parts: &Parts,
    artifact: &Artifact,
    cache_control: &str,
) -> Result<Response, axum::http::Error> {
    let builder = Response::builder()
        .header(CACHE_CONTROL, cache_control)
        .header(CONTENT_TYPE, CSS_CONTENT_TYPE)
        .header(ETAG, artifact.etag());

    if is_fresh(&parts.headers, artifact.etag()) {
        return builder.status(StatusCode::NOT_MODIFIED).body(Body::empty());
    }

    if parts.method == Method::HEAD {
        return builder
            .status(StatusCode::OK)
            .header(CONTENT_LENGTH, artifact.css().len())
            .body(Body::empty());
    }

    builder
        .status(StatusCode::OK)
        .body(Body::from(artifact.css().to_owned()))
}

/// Response for methods other than GET/HEAD: 200 for OPTIONS, 405 otherwise.
pub fn method_response(method: &Method) -> Result<Response, axum::http::Error> {
    let status = if method == Method::OPTIONS {
        StatusCode::OK
    } else {
        StatusCode::METHOD_NOT_ALLOWED
    };

    Response::builder()
        .status(status)
        .header(ALLOW, ALLOWED_METHODS)
        .body(Body::empty())
}

/// Bodiless response with only a status code.
pub fn status_response(status: StatusCode) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

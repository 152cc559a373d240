//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::{middleware, routing::get, Router};
use tempfile::TempDir;
use tower::ServiceExt;

use sassy::{sassy_middleware, Sassy};

pub const ONE_SCSS: &str = "$primary: #333;\nbody {\n  color: $primary;\n}\n";
pub const TWO_SCSS: &str = "@import 'colors';\n.two {\n  .inner { color: $accent; }\n}\n";
pub const COLORS_SCSS: &str = "$accent: #f00;\n";
pub const ONE_SASS: &str = "$c: red\nbody\n  color: $c\n";

/// A source directory with `one.scss`, `two.scss` and a `_colors.scss` partial.
pub fn assets() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.scss"), ONE_SCSS).unwrap();
    fs::write(dir.path().join("two.scss"), TWO_SCSS).unwrap();
    fs::write(dir.path().join("_colors.scss"), COLORS_SCSS).unwrap();
    fs::write(dir.path().join("readme.txt"), "not a stylesheet").unwrap();
    dir
}

/// Rewrite a source and push its mtime into the future so it reads as newer.
pub fn rewrite(path: &Path, content: &str, secs_ahead: u64) {
    fs::write(path, content).unwrap();
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() + Duration::from_secs(secs_ahead))
        .unwrap();
}

/// Host app: a couple of unrelated routes plus the stylesheet middleware.
pub fn app(sassy: Sassy) -> Router {
    Router::new()
        .route("/", get(|| async { "home" }))
        .route("/one.css", get(|| async { "host" }))
        .layer(middleware::from_fn_with_state(sassy, sassy_middleware))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Send one request through the router.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn fetch(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::GET, uri, &[]).await
}

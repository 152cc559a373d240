//! Stylesheet middleware.
//! Serves compiled stylesheets and passes every other request through.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::guard::Sassy;

/// Axum middleware around [`Sassy::handle`].
///
/// ```ignore
/// let app = Router::new()
///     .route("/", get(index))
///     .layer(axum::middleware::from_fn_with_state(sassy, sassy_middleware));
/// ```
pub async fn sassy_middleware(
    State(sassy): State<Sassy>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();

    match sassy.handle(&parts).await {
        Some(response) => response,
        None => next.run(Request::from_parts(parts, body)).await,
    }
}

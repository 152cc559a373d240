//! Standalone HTTP host for the stylesheet middleware.
//!
//! # Responsibilities
//! - Create an Axum Router with the middleware and a 404 fallback
//! - Wire up request tracing
//! - Serve on a listener until shutdown

use std::future::Future;

use axum::{http::StatusCode, middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::http::guard::Sassy;
use crate::http::middleware::sassy_middleware;

/// HTTP server that only serves stylesheets.
pub struct StylesheetServer {
    router: Router,
}

impl StylesheetServer {
    /// Create a server around a constructed middleware.
    pub fn new(sassy: Sassy) -> Self {
        Self {
            router: Self::build_router(sassy),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(sassy: Sassy) -> Router {
        Router::new()
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(middleware::from_fn_with_state(sassy, sassy_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// The configured router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run until Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run until `shutdown` completes.
    pub async fn run_until<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Stylesheet server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Stylesheet server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

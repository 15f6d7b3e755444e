//! HTTP delivery: an axum router exposing the pay-employee use case.

pub mod error;
pub mod handlers;

use crate::error::Result;
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Builds the application router.
pub fn router() -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/pay/:employee_id", get(handlers::pay_employee))
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves the router until Ctrl-C is received.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("payroll server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("payroll server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            // Without a signal handler the server runs until killed
            warn!("failed to install Ctrl-C handler: {err}");
            std::future::pending::<()>().await;
        }
    }
}

//! HTTP surface: liveness probe and the inbox endpoint.

use anyhow::{Context, Result};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::domain::{Entry, HealthResponse, InboxResponse};
use crate::notion::InboxGateway;
use crate::service::create_inbox_entry;

pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Builds a fresh gateway for one request.
///
/// Called on the blocking pool, so the gateway may perform blocking I/O.
pub type GatewayFactory = Arc<dyn Fn() -> Result<Box<dyn InboxGateway>> + Send + Sync>;

#[derive(Clone)]
struct AppState {
    gateway_factory: GatewayFactory,
    /// Held for the whole of each filing so rollup reads and appends never interleave.
    in_flight: Arc<Mutex<()>>,
}

/// Returns the application router.
pub fn router(gateway_factory: GatewayFactory) -> Router {
    let state = AppState {
        gateway_factory,
        in_flight: Arc::new(Mutex::new(())),
    };

    Router::new()
        .route("/health", get(health))
        .route("/v1/inbox", post(post_inbox))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

async fn post_inbox(State(state): State<AppState>, Json(entry): Json<Entry>) -> Json<InboxResponse> {
    // Owned so the blocking task keeps it even if this handler is dropped.
    let guard = Arc::clone(&state.in_flight).lock_owned().await;
    let factory = Arc::clone(&state.gateway_factory);

    let response = tokio::task::spawn_blocking(move || {
        let _guard = guard;
        match factory() {
            Ok(gateway) => create_inbox_entry(&entry, gateway.as_ref()),
            Err(err) => {
                error!("failed to build gateway: {err:#}");
                InboxResponse::failure(format!("Unexpected error: {err:#}"))
            }
        }
    })
    .await
    .unwrap_or_else(|err| InboxResponse::failure(format!("Unexpected error: {err}")));

    Json(response)
}

/// Serves the router on `addr` until Ctrl-C.
pub async fn serve(addr: SocketAddr, gateway_factory: GatewayFactory) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "inbox server listening");

    axum::serve(listener, router(gateway_factory))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}

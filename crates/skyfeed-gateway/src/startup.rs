//! Gateway startup helper for embedding in the relay binary.
//!
//! Provides [`spawn_gateway`] which launches the HTTP + `WebSocket`
//! server on a background Tokio task. The relay binary calls this
//! during startup so the gateway runs concurrently with the ingest
//! receive loop.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::server::{start_server, ServerConfig, ServerError};
use crate::state::AppState;

/// Errors that can occur when spawning the gateway server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// Spawn the gateway server on a background Tokio task.
///
/// Binds to `{host}:{port}` and serves the bootstrap page plus the
/// `WebSocket` reading stream. Returns a [`JoinHandle`] so the caller
/// can manage the server's lifecycle alongside the ingest loop.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the configured address cannot
/// be parsed. A bind failure inside the background task is logged,
/// not returned; the relay keeps ingesting regardless.
pub async fn spawn_gateway(
    config: ServerConfig,
    state: Arc<AppState>,
) -> Result<JoinHandle<()>, StartupError> {
    // Catch obvious misconfigurations before spawning; the actual
    // bind happens inside start_server.
    let addr = config.socket_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = start_server(&config, state).await {
            tracing::error!(error = %e, "gateway server exited with error");
        }
    });

    tracing::info!(%addr, "gateway server spawned on background task");

    Ok(handle)
}

//! Axum router construction for the gateway.
//!
//! Assembles the two routes (static page + `WebSocket`) into a single
//! [`Router`] with CORS middleware enabled so the bootstrap page can
//! also be hosted elsewhere during development.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the gateway server.
///
/// The router includes:
/// - `GET /` -- static bootstrap page
/// - `GET /ws/readings` -- `WebSocket` reading stream
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/ws/readings", get(ws::ws_readings))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! HTTP endpoint handlers for the gateway server.
//!
//! Only one plain-HTTP endpoint exists: the static bootstrap page.
//! Everything else the gateway does goes over the `WebSocket` in
//! [`ws`](crate::ws).

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::warn;

use crate::state::AppState;

/// Body returned when the bootstrap page is missing.
const NOT_FOUND_BODY: &str = "404 Not Found";

/// Serve the static bootstrap page.
///
/// Reads the configured HTML document on every request — the file is
/// small and this keeps edits visible without a restart. Returns 200
/// with the document, or 404 with a fixed plain-text body if the
/// file cannot be read.
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read_to_string(&state.page_path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            warn!(path = %state.page_path.display(), error = %e, "bootstrap page unavailable");
            (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
        }
    }
}

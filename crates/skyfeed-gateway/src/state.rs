//! Shared application state for the gateway server.

use std::path::PathBuf;
use std::sync::Arc;

use skyfeed_hub::BroadcastHub;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// hub is the same instance the ingest listener publishes into; the
/// gateway only adds subscribers to it.
#[derive(Clone)]
pub struct AppState {
    /// The broadcast hub new `WebSocket` connections subscribe to.
    pub hub: Arc<BroadcastHub>,
    /// Filesystem path of the static bootstrap page served at `/`.
    pub page_path: PathBuf,
}

impl AppState {
    /// Create gateway state around an existing hub.
    pub fn new(hub: Arc<BroadcastHub>, page_path: impl Into<PathBuf>) -> Self {
        Self {
            hub,
            page_path: page_path.into(),
        }
    }
}

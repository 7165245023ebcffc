//! Relay binary for the Skyfeed telemetry relay.
//!
//! This is the entry point that wires the pipeline together: one
//! [`BroadcastHub`] constructed at startup and injected into both the
//! UDP ingest listener (publish side) and the gateway server
//! (subscribe side). The gateway runs on a background task; the
//! ingest receive loop runs in the foreground.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `skyfeed-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Apply environment port overrides (logged, now that we can)
//! 4. Construct the broadcast hub
//! 5. Spawn the gateway server (bootstrap page + `WebSocket` stream)
//! 6. Bind the UDP ingest socket (the only fatal runtime condition)
//! 7. Run the receive loop

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use skyfeed_gateway::{spawn_gateway, AppState, ServerConfig};
use skyfeed_hub::BroadcastHub;
use skyfeed_ingest::IngestListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::RelayConfig;
use crate::error::RelayError;

/// Default location of the configuration file.
const CONFIG_PATH: &str = "skyfeed-config.yaml";

/// Application entry point for the relay.
///
/// # Errors
///
/// Returns an error if configuration loading, the gateway spawn, or
/// the ingest socket bind fails.
#[tokio::main]
async fn main() -> Result<(), RelayError> {
    // 1. Load configuration (file only; env overrides come later so
    //    their warnings are not lost before logging is up).
    let mut config = RelayConfig::load(Path::new(CONFIG_PATH))?;

    // 2. Initialize structured logging. RUST_LOG wins over the file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("skyfeed-relay starting");

    // 3. Apply environment port overrides.
    config.apply_env_overrides();
    info!(
        ingest_port = config.ingest.port,
        http_host = config.http.host,
        http_port = config.http.port,
        page = config.http.page,
        "configuration loaded"
    );

    // 4. Construct the broadcast hub.
    let hub = Arc::new(BroadcastHub::new());

    // 5. Spawn the gateway server on a background task.
    let state = Arc::new(AppState::new(Arc::clone(&hub), config.http.page.clone()));
    let server_config = ServerConfig {
        host: config.http.host.clone(),
        port: config.http.port,
    };
    let _gateway = spawn_gateway(server_config, state).await?;

    // 6. Bind the ingest socket; a bind failure is fatal.
    let listener = IngestListener::bind(config.ingest.port, Arc::clone(&hub)).await?;

    // 7. Run the receive loop.
    listener.run().await;

    Ok(())
}

//! Gateway server for the Skyfeed telemetry relay.
//!
//! This crate provides the Axum server subscribers connect to:
//!
//! - **`WebSocket` endpoint** (`/ws/readings`) — joins the
//!   [`BroadcastHub`](skyfeed_hub::BroadcastHub) and streams one
//!   `"data"` event per decoded reading
//! - **Static bootstrap page** (`GET /`) — the fixed HTML document
//!   that connects a browser to the stream
//!
//! # Architecture
//!
//! The gateway never produces readings; it only hands each new
//! `WebSocket` connection to the hub and forwards that subscriber's
//! stream. The hub instance is injected through [`AppState`] — the
//! same instance the ingest listener publishes into.
//!
//! [`AppState`]: state::AppState

pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use startup::{spawn_gateway, StartupError};
pub use state::AppState;

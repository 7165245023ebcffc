//! `WebSocket` handler for the live reading stream.
//!
//! Clients connect to `GET /ws/readings` and receive a JSON-encoded
//! [`ReadingEvent`] (`{"event":"data","payload":{...}}`) for every
//! reading published while they are connected. There is no catch-up:
//! readings published before the connection completed are never
//! replayed.
//!
//! Each connection is its own task holding the receive half of a
//! bounded buffer. If the client falls behind, the hub drops readings
//! for this client only; the stream resumes with whatever is
//! published next.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use skyfeed_types::ReadingEvent;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Upgrade an HTTP request to a `WebSocket` connection and begin
/// streaming readings.
///
/// # Route
///
/// `GET /ws/readings`
pub async fn ws_readings(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_ws(socket, state))
}

/// Handle the `WebSocket` lifecycle: subscribe to the hub, forward
/// each reading as a text frame, unsubscribe on any exit path.
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    let (id, mut rx) = state.hub.subscribe().await;
    info!(subscriber = %id, "subscriber connected");

    loop {
        tokio::select! {
            // Forward the next reading from the hub.
            reading = rx.recv() => {
                let Some(reading) = reading else {
                    // The hub dropped our sender (we were removed).
                    debug!(subscriber = %id, "hub closed the subscription");
                    break;
                };
                let json = match serde_json::to_string(&ReadingEvent::data(reading)) {
                    Ok(j) => j,
                    Err(e) => {
                        warn!(subscriber = %id, "failed to serialize reading event: {e}");
                        continue;
                    }
                };
                if socket.send(Message::Text(json.into())).await.is_err() {
                    debug!(subscriber = %id, "subscriber disconnected (send failed)");
                    break;
                }
            }
            // Watch for a close frame or transport error from the client.
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => {
                        debug!(subscriber = %id, "subscriber disconnected");
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            debug!(subscriber = %id, "subscriber disconnected (pong failed)");
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        debug!(subscriber = %id, "websocket error: {e}");
                        break;
                    }
                    _ => {
                        // The stream is read-only; ignore client text/binary.
                    }
                }
            }
        }
    }

    state.hub.unsubscribe(id).await;
}

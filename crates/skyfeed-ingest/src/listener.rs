//! The UDP ingest listener.
//!
//! A dedicated task whose only job is to wait for the next datagram
//! and dispatch it: receive, decode, publish. The receive is the only
//! suspension point on this path — decoding is synchronous and the
//! hub's publish never blocks on subscriber state, so a slow or dead
//! subscriber cannot stall ingestion.

use std::net::SocketAddr;
use std::sync::Arc;

use skyfeed_hub::BroadcastHub;
use tokio::net::UdpSocket;
use tracing::{info, trace, warn};

use crate::decode::decode;
use crate::error::IngestError;

/// Receive buffer size; generously above any well-formed record.
const MAX_DATAGRAM: usize = 2048;

/// Listens for telemetry datagrams and publishes decoded readings.
///
/// Constructed with [`bind`](Self::bind) and driven by
/// [`run`](Self::run). The hub is injected; the listener owns the
/// socket, so dropping the listener releases the bound port.
pub struct IngestListener {
    socket: UdpSocket,
    hub: Arc<BroadcastHub>,
}

impl IngestListener {
    /// Bind the ingest socket on `0.0.0.0:{port}`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Bind`] if the socket cannot be bound.
    /// This is the one fatal startup condition on the ingest path.
    pub async fn bind(port: u16, hub: Arc<BroadcastHub>) -> Result<Self, IngestError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|source| IngestError::Bind { port, source })?;
        info!(%addr, "ingest listener bound, waiting for datagrams");
        Ok(Self { socket, hub })
    }

    /// The address the socket actually bound to.
    ///
    /// Useful when binding port 0 in tests.
    pub fn local_addr(&self) -> Result<SocketAddr, IngestError> {
        self.socket
            .local_addr()
            .map_err(|source| IngestError::Socket { source })
    }

    /// Run the receive loop forever.
    ///
    /// Each datagram is handled to completion — receive, decode,
    /// publish — before the next receive. Malformed datagrams and
    /// transient socket errors are logged and skipped; neither ends
    /// the loop.
    pub async fn run(self) {
        let mut buf = vec![0_u8; MAX_DATAGRAM];
        loop {
            match self.socket.recv_from(&mut buf).await {
                Ok((len, peer)) => {
                    let payload = String::from_utf8_lossy(buf.get(..len).unwrap_or(&[]));
                    self.process_datagram(peer, &payload).await;
                }
                Err(e) => {
                    warn!(error = %e, "datagram receive failed, continuing");
                }
            }
        }
    }

    /// Decode one payload and publish it on success.
    async fn process_datagram(&self, peer: SocketAddr, payload: &str) {
        info!(%peer, payload, "datagram received");
        match decode(payload) {
            Ok(reading) => {
                let delivered = self.hub.publish(&reading).await;
                trace!(delivered, "reading fanned out");
            }
            Err(e) => {
                warn!(%peer, error = %e, "dropping malformed datagram");
            }
        }
    }
}

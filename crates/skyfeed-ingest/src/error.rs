//! Error types for the ingest listener.
//!
//! Decode failures are not here — they are [`DecodeError`]s, fully
//! recovered inside the receive loop. [`IngestError`] covers the
//! socket itself; failing to bind at startup is the only failure on
//! the ingest path that is allowed to take the process down.
//!
//! [`DecodeError`]: crate::decode::DecodeError

/// Errors from the ingest listener's socket.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The UDP socket could not be bound at startup.
    #[error("failed to bind ingest socket on port {port}: {source}")]
    Bind {
        /// The port that was requested.
        port: u16,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The bound socket's local address could not be read.
    #[error("ingest socket address unavailable: {source}")]
    Socket {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

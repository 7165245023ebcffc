//! Error types for the relay binary.
//!
//! [`RelayError`] is the top-level error type that wraps all possible
//! failure modes during relay startup.

/// Top-level error for the relay binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The ingest socket could not be bound.
    #[error("ingest error: {source}")]
    Ingest {
        /// The underlying ingest error.
        #[from]
        source: skyfeed_ingest::IngestError,
    },

    /// The gateway server failed to start.
    #[error("gateway error: {source}")]
    Gateway {
        /// The underlying gateway startup error.
        #[from]
        source: skyfeed_gateway::StartupError,
    },
}

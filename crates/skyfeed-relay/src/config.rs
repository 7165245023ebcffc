//! Configuration loading and typed config structures for the relay.
//!
//! The canonical configuration lives in `skyfeed-config.yaml` at the
//! project root. This module defines strongly-typed structs that
//! mirror the YAML structure and provides a loader. A missing file is
//! not an error — the relay runs on its defaults (UDP 5005, HTTP
//! 8080).
//!
//! Environment variables override the file for the two ports:
//! `SKYFEED_INGEST_PORT` and `SKYFEED_HTTP_PORT`.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level relay configuration.
///
/// Mirrors the structure of `skyfeed-config.yaml`. Every field has a
/// default, so any subset of the file may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelayConfig {
    /// UDP ingest settings.
    #[serde(default)]
    pub ingest: IngestConfig,

    /// HTTP/`WebSocket` gateway settings.
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UDP ingest settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IngestConfig {
    /// UDP port the sensors send datagrams to.
    #[serde(default = "default_ingest_port")]
    pub port: u16,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            port: default_ingest_port(),
        }
    }
}

/// HTTP/`WebSocket` gateway settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind (e.g. `0.0.0.0`).
    #[serde(default = "default_http_host")]
    pub host: String,

    /// TCP port for the bootstrap page and the `WebSocket` stream.
    #[serde(default = "default_http_port")]
    pub port: u16,

    /// Path of the static bootstrap page served at `/`.
    #[serde(default = "default_page_path")]
    pub page: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_http_host(),
            port: default_http_port(),
            page: default_page_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_ingest_port() -> u16 {
    5005
}

fn default_http_host() -> String {
    String::from("0.0.0.0")
}

fn default_http_port() -> u16 {
    8080
}

fn default_page_path() -> String {
    String::from("public/index.html")
}

fn default_log_level() -> String {
    String::from("info")
}

impl RelayConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// A missing file yields the full default configuration. This
    /// reads the file only; environment overrides are applied
    /// separately via [`apply_env_overrides`](Self::apply_env_overrides)
    /// once logging is up, so a rejected override is never silently
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if an existing file cannot be
    /// read, or [`ConfigError::Yaml`] if its content does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_yml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Override the ports from `SKYFEED_INGEST_PORT` and
    /// `SKYFEED_HTTP_PORT`, when set.
    ///
    /// Call after tracing is initialized: an unparseable value is
    /// ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        self.apply_port_overrides(
            std::env::var("SKYFEED_INGEST_PORT").ok(),
            std::env::var("SKYFEED_HTTP_PORT").ok(),
        );
    }

    /// Apply environment port overrides, ignoring unparseable values.
    fn apply_port_overrides(&mut self, ingest: Option<String>, http: Option<String>) {
        if let Some(value) = ingest {
            match value.parse::<u16>() {
                Ok(port) => self.ingest.port = port,
                Err(e) => warn!(value, error = %e, "ignoring invalid SKYFEED_INGEST_PORT"),
            }
        }
        if let Some(value) = http {
            match value.parse::<u16>() {
                Ok(port) => self.http.port = port,
                Err(e) => warn!(value, error = %e, "ignoring invalid SKYFEED_HTTP_PORT"),
            }
        }
    }
}

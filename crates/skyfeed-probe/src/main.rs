//! Synthetic sensor probe for the Skyfeed telemetry relay.
//!
//! Stands in for the real sensor board during development: once a
//! second it emits one telemetry datagram in the exact wire format
//! the relay ingests, with each value taking a small random walk so
//! the stream visibly changes.
//!
//! The target address comes from the `SKYFEED_TARGET` environment
//! variable, defaulting to `127.0.0.1:5005`.

use std::time::Duration;

use rand::Rng;
use tokio::net::UdpSocket;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Where datagrams go when `SKYFEED_TARGET` is not set.
const DEFAULT_TARGET: &str = "127.0.0.1:5005";

/// Delay between datagrams.
const SEND_INTERVAL: Duration = Duration::from_secs(1);

/// Errors that can occur while running the probe.
#[derive(Debug, thiserror::Error)]
enum ProbeError {
    /// The local UDP socket could not be created.
    #[error("failed to open probe socket: {source}")]
    Socket {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Simulated sensor values, random-walked each tick.
struct SensorState {
    temperature: f64,
    pressure: f64,
    humidity: f64,
    latitude: f64,
    longitude: f64,
}

impl SensorState {
    /// Start from plausible mid-range values.
    const fn new() -> Self {
        Self {
            temperature: 23.5,
            pressure: 1013.2,
            humidity: 45.0,
            latitude: 40.4168,
            longitude: -3.7038,
        }
    }

    /// Nudge every value by a small random delta.
    #[allow(clippy::arithmetic_side_effects)]
    fn step(&mut self, rng: &mut impl Rng) {
        self.temperature += rng.random_range(-0.2..0.2);
        self.pressure += rng.random_range(-0.5..0.5);
        self.humidity = (self.humidity + rng.random_range(-1.0..1.0)).clamp(0.0, 100.0);
        self.latitude += rng.random_range(-0.0001..0.0001);
        self.longitude += rng.random_range(-0.0001..0.0001);
    }

    /// Render the fixed wire format: five `label:value` fields joined
    /// by exactly three spaces.
    fn to_record(&self) -> String {
        format!(
            "temp:{:.1}   pressure:{:.1}   humidity:{:.0}   latitude:{:.6}   longitude:{:.6}",
            self.temperature, self.pressure, self.humidity, self.latitude, self.longitude
        )
    }
}

/// Send one synthetic reading per second, forever.
#[tokio::main]
async fn main() -> Result<(), ProbeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let target =
        std::env::var("SKYFEED_TARGET").unwrap_or_else(|_| String::from(DEFAULT_TARGET));
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    info!(target, "probe started");

    let mut rng = rand::rng();
    let mut sensor = SensorState::new();

    loop {
        sensor.step(&mut rng);
        let record = sensor.to_record();
        info!(record, "sending reading");
        if let Err(e) = socket.send_to(record.as_bytes(), &target).await {
            // Best-effort, like the real sensor: log and keep going.
            warn!(error = %e, "send failed");
        }
        tokio::time::sleep(SEND_INTERVAL).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn record_is_decodable_by_the_relay() {
        let reading = skyfeed_ingest::decode(&SensorState::new().to_record()).unwrap();
        assert_eq!(reading.temperature, "23.5");
        assert_eq!(reading.pressure, "1013.2");
        assert_eq!(reading.humidity, "45");
        assert_eq!(reading.latitude, "40.416800");
        assert_eq!(reading.longitude, "-3.703800");
    }

    #[test]
    fn stepped_record_stays_well_formed() {
        let mut sensor = SensorState::new();
        let mut rng = rand::rng();
        for _ in 0..50 {
            sensor.step(&mut rng);
            assert!(skyfeed_ingest::decode(&sensor.to_record()).is_ok());
        }
    }
}

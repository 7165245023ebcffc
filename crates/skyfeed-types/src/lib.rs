//! Shared type definitions for the Skyfeed telemetry relay.
//!
//! This crate holds the data types that cross crate boundaries:
//!
//! - [`Reading`] — a decoded sensor sample (temperature, pressure,
//!   humidity, GPS coordinates), produced by the ingest decoder and
//!   consumed by the broadcast hub.
//! - [`ReadingEvent`] — the JSON envelope pushed to `WebSocket`
//!   subscribers, carrying one [`Reading`] under the event name
//!   `"data"`.
//!
//! Pure data + serde. No I/O, no async.

pub mod event;
pub mod reading;

pub use event::{ReadingEvent, DATA_EVENT};
pub use reading::Reading;

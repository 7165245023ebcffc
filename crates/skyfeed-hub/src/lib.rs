//! Broadcast hub for the Skyfeed telemetry relay.
//!
//! The [`BroadcastHub`] owns the set of live subscribers and fans
//! every published [`Reading`](skyfeed_types::Reading) out to all of
//! them, best-effort. It is constructed once at startup and injected
//! into both the ingest listener (publish side) and the gateway's
//! `WebSocket` accept path (subscribe side) — there is no global
//! registry.
//!
//! # Delivery semantics
//!
//! - Every subscriber present in the registry when `publish` runs is
//!   attempted exactly once per reading.
//! - Per-subscriber stream order equals publish order; there is no
//!   ordering guarantee *across* subscribers.
//! - Delivery is fire-and-forget: a dead subscriber is removed, a
//!   slow one loses the reading, and neither outcome is ever surfaced
//!   to the publisher.
//! - Subscribers joining after a publish never see that reading (no
//!   catch-up buffer).

pub mod error;
pub mod hub;

pub use error::DeliveryError;
pub use hub::{BroadcastHub, SubscriberId, SUBSCRIBER_BUFFER};

//! UDP ingest for the Skyfeed telemetry relay.
//!
//! Two pieces:
//!
//! - [`decode`](decode::decode) — the pure record decoder: raw
//!   datagram text in, [`Reading`](skyfeed_types::Reading) or
//!   [`DecodeError`](decode::DecodeError) out. No state, no I/O.
//! - [`IngestListener`](listener::IngestListener) — binds the UDP
//!   socket, receives datagrams, decodes them, and publishes every
//!   successful reading to the injected
//!   [`BroadcastHub`](skyfeed_hub::BroadcastHub).
//!
//! A malformed datagram is logged and dropped; it never terminates
//! the listener, reaches the hub, or affects later datagrams. The
//! only fatal error on this path is failing to bind the socket at
//! startup.

pub mod decode;
pub mod error;
pub mod listener;

pub use decode::{decode, DecodeError};
pub use error::IngestError;
pub use listener::IngestListener;

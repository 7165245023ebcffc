//! Error types for the broadcast hub.
//!
//! [`DeliveryError`] describes why one subscriber did not receive one
//! reading. It is consumed entirely inside the hub — a `Closed`
//! result drives the subscriber's removal, a `BufferFull` result
//! drops that single reading — and is never propagated to the
//! publisher or to other subscribers.

/// Failure to deliver a single reading to a single subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The subscriber's channel is closed; the connection is gone and
    /// the subscriber will be removed from the registry.
    #[error("subscriber channel closed")]
    Closed,

    /// The subscriber's bounded buffer is full; the reading is
    /// dropped for this subscriber only. The subscriber stays
    /// registered and resumes with the next reading it can accept.
    #[error("subscriber buffer full, reading dropped")]
    BufferFull,
}

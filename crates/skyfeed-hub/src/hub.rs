//! Subscriber registry and best-effort fanout.

use std::collections::HashMap;
use std::fmt;

use skyfeed_types::Reading;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::DeliveryError;

/// Capacity of each subscriber's bounded reading buffer.
///
/// A subscriber that falls more than this many readings behind starts
/// losing readings (drop-newest) until it drains its buffer. The
/// bound is what keeps a slow consumer from ever stalling ingestion.
pub const SUBSCRIBER_BUFFER: usize = 64;

/// Opaque identifier for a connected subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(Uuid);

impl SubscriberId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of currently connected subscribers and the fanout over it.
///
/// Membership is mutated by the gateway's connect/disconnect path
/// concurrently with publishes from the ingest listener; the
/// [`RwLock`] guarantees every publish operates on a consistent
/// snapshot of the registry. Sends are non-blocking, so the lock is
/// never held across a suspension point.
pub struct BroadcastHub {
    subscribers: RwLock<HashMap<SubscriberId, mpsc::Sender<Reading>>>,
}

impl BroadcastHub {
    /// Create a hub with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new subscriber.
    ///
    /// Returns the subscriber's id and the receiving half of its
    /// bounded buffer. The subscriber sees every reading published
    /// after this call returns and nothing published before it.
    pub async fn subscribe(&self) -> (SubscriberId, mpsc::Receiver<Reading>) {
        let (tx, rx) = mpsc::channel(SUBSCRIBER_BUFFER);
        let id = SubscriberId::new();
        self.subscribers.write().await.insert(id, tx);
        debug!(subscriber = %id, "subscriber registered");
        (id, rx)
    }

    /// Remove a subscriber from the registry.
    ///
    /// Idempotent: removing an unknown or already-removed id is a
    /// no-op.
    pub async fn unsubscribe(&self, id: SubscriberId) {
        if self.subscribers.write().await.remove(&id).is_some() {
            debug!(subscriber = %id, "subscriber removed");
        }
    }

    /// Number of currently registered subscribers.
    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.len()
    }

    /// Fan a reading out to every registered subscriber, best-effort.
    ///
    /// Returns the number of subscribers whose buffer accepted the
    /// reading. Delivery failures never surface to the caller: a
    /// closed subscriber is removed from the registry, a full buffer
    /// drops this reading for that subscriber only. Readings queued
    /// into a subscriber's buffer preserve publish order.
    pub async fn publish(&self, reading: &Reading) -> usize {
        let mut delivered: usize = 0;
        let mut closed: Vec<SubscriberId> = Vec::new();

        {
            let subscribers = self.subscribers.read().await;
            for (id, tx) in subscribers.iter() {
                match Self::deliver(tx, reading) {
                    Ok(()) => delivered = delivered.saturating_add(1),
                    Err(DeliveryError::Closed) => {
                        trace!(subscriber = %id, "delivery failed, channel closed");
                        closed.push(*id);
                    }
                    Err(DeliveryError::BufferFull) => {
                        debug!(subscriber = %id, "buffer full, reading dropped");
                    }
                }
            }
        }

        if !closed.is_empty() {
            let mut subscribers = self.subscribers.write().await;
            for id in closed {
                if subscribers.remove(&id).is_some() {
                    debug!(subscriber = %id, "dead subscriber removed");
                }
            }
        }

        delivered
    }

    /// Attempt one non-blocking send to one subscriber.
    fn deliver(tx: &mpsc::Sender<Reading>, reading: &Reading) -> Result<(), DeliveryError> {
        tx.try_send(reading.clone()).map_err(|e| match e {
            TrySendError::Closed(_) => DeliveryError::Closed,
            TrySendError::Full(_) => DeliveryError::BufferFull,
        })
    }
}

impl Default for BroadcastHub {
    fn default() -> Self {
        Self::new()
    }
}

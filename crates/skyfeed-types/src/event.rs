//! The subscriber-facing message envelope.

use serde::{Deserialize, Serialize};

use crate::reading::Reading;

/// Name of the event carrying a decoded reading.
///
/// Every message the hub pushes to a subscriber is a `"data"` event;
/// there are no other event kinds in the fanout stream.
pub const DATA_EVENT: &str = "data";

/// JSON envelope pushed to `WebSocket` subscribers.
///
/// Wire shape:
///
/// ```json
/// {"event":"data","payload":{"temp":"23.5","pressure":"1013.2",...}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingEvent {
    /// Event name; always [`DATA_EVENT`].
    pub event: String,
    /// The decoded reading being broadcast.
    pub payload: Reading,
}

impl ReadingEvent {
    /// Wrap a reading in a `"data"` event envelope.
    pub fn data(payload: Reading) -> Self {
        Self {
            event: String::from(DATA_EVENT),
            payload,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn data_event_has_expected_shape() {
        let event = ReadingEvent::data(Reading {
            temperature: String::from("23.5"),
            pressure: String::from("1013.2"),
            humidity: String::from("45"),
            latitude: String::from("40.4168"),
            longitude: String::from("-3.7038"),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "data");
        assert_eq!(json["payload"]["temp"], "23.5");
        assert_eq!(json["payload"]["longitude"], "-3.7038");
    }
}

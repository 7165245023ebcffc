//! The decoded sensor sample.

use serde::{Deserialize, Serialize};

/// A single decoded sensor sample.
///
/// All values are kept as the text the sensor transmitted. The relay
/// does not validate units or ranges, so parsing to numeric types
/// would invent precision guarantees the input never made; downstream
/// consumers interpret the values.
///
/// A `Reading` only comes into existence through successful decoding
/// of a datagram, is immutable once constructed, and carries no
/// identity beyond its values — no sequence number, no timestamp. It
/// is fanned out immediately and never retained.
///
/// The serialized form uses the wire key `temp` for the temperature
/// field; the remaining keys match the field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature as transmitted (e.g. `"23.5"`).
    #[serde(rename = "temp")]
    pub temperature: String,
    /// Barometric pressure as transmitted (e.g. `"1013.2"`).
    pub pressure: String,
    /// Relative humidity as transmitted (e.g. `"45"`).
    pub humidity: String,
    /// GPS latitude in decimal degrees, as transmitted.
    pub latitude: String,
    /// GPS longitude in decimal degrees, as transmitted.
    pub longitude: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn make_reading() -> Reading {
        Reading {
            temperature: String::from("23.5"),
            pressure: String::from("1013.2"),
            humidity: String::from("45"),
            latitude: String::from("40.4168"),
            longitude: String::from("-3.7038"),
        }
    }

    #[test]
    fn serializes_with_temp_wire_key() {
        let json = serde_json::to_value(make_reading()).unwrap();
        assert_eq!(json["temp"], "23.5");
        assert_eq!(json["pressure"], "1013.2");
        assert_eq!(json["humidity"], "45");
        assert_eq!(json["latitude"], "40.4168");
        assert_eq!(json["longitude"], "-3.7038");
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let reading = make_reading();
        let json = serde_json::to_string(&reading).unwrap();
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
    }
}

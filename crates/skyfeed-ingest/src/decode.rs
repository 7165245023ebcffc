//! The record decoder: fixed-format datagram text into a [`Reading`].
//!
//! Wire format, fixed by the sensor fleet:
//!
//! ```text
//! temp:23.5   pressure:1013.2   humidity:45   latitude:40.4168   longitude:-3.7038
//! ```
//!
//! Exactly five fields separated by a run of three consecutive
//! spaces; each field is `<label>:<value>`. Fields are assigned
//! positionally (temperature, pressure, humidity, latitude,
//! longitude) — the label text is *not* validated against an expected
//! name. That positional trust is the documented contract with the
//! sensors, not an oversight.
//!
//! Values stay as text, trimmed. No numeric validation, no range
//! checks, no unit conversion; interpretation belongs downstream.

use skyfeed_types::Reading;

/// The field separator: exactly three consecutive spaces.
const FIELD_SEPARATOR: &str = "   ";

/// Failure to decode one datagram payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The payload did not split into exactly five fields on the
    /// three-space separator.
    #[error("expected 5 fields separated by three spaces, found {found}")]
    MalformedRecord {
        /// How many fields the split actually produced.
        found: usize,
    },

    /// A field had no colon between label and value.
    #[error("field {field:?} has no colon separator")]
    MalformedField {
        /// The offending field text.
        field: String,
    },
}

/// Decode one datagram payload into a [`Reading`].
///
/// Pure: no state, no I/O. The value of each field is the text after
/// the *first* colon, with surrounding whitespace trimmed.
pub fn decode(payload: &str) -> Result<Reading, DecodeError> {
    let tokens: Vec<&str> = payload.split(FIELD_SEPARATOR).collect();
    let [temp, pressure, humidity, latitude, longitude] = tokens.as_slice() else {
        return Err(DecodeError::MalformedRecord {
            found: tokens.len(),
        });
    };

    Ok(Reading {
        temperature: field_value(temp)?,
        pressure: field_value(pressure)?,
        humidity: field_value(humidity)?,
        latitude: field_value(latitude)?,
        longitude: field_value(longitude)?,
    })
}

/// Extract the value half of a `<label>:<value>` field.
fn field_value(field: &str) -> Result<String, DecodeError> {
    let (_label, value) = field
        .split_once(':')
        .ok_or_else(|| DecodeError::MalformedField {
            field: field.to_string(),
        })?;
    Ok(value.trim().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_record() {
        let payload =
            "temp:23.5   pressure:1013.2   humidity:45   latitude:40.4168   longitude:-3.7038";
        let reading = decode(payload).unwrap();
        assert_eq!(reading.temperature, "23.5");
        assert_eq!(reading.pressure, "1013.2");
        assert_eq!(reading.humidity, "45");
        assert_eq!(reading.latitude, "40.4168");
        assert_eq!(reading.longitude, "-3.7038");
    }

    #[test]
    fn round_trips_arbitrary_values() {
        let values = ["a b", "x:y", "", " padded ", "-0.0001"];
        let payload = values
            .iter()
            .map(|v| format!("label:{v}"))
            .collect::<Vec<_>>()
            .join("   ");

        let reading = decode(&payload).unwrap();
        assert_eq!(reading.temperature, "a b");
        // First-colon split: the rest of the token is the value.
        assert_eq!(reading.pressure, "x:y");
        assert_eq!(reading.humidity, "");
        assert_eq!(reading.latitude, "padded");
        assert_eq!(reading.longitude, "-0.0001");
    }

    #[test]
    fn labels_are_trusted_by_position() {
        // Wrong, even swapped, labels still decode positionally.
        let payload = "humidity:1   temp:2   pressure:3   lon:4   lat:5";
        let reading = decode(payload).unwrap();
        assert_eq!(reading.temperature, "1");
        assert_eq!(reading.pressure, "2");
        assert_eq!(reading.humidity, "3");
        assert_eq!(reading.latitude, "4");
        assert_eq!(reading.longitude, "5");
    }

    #[test]
    fn rejects_single_space_separation() {
        let err = decode("temp:23.5 pressure:1013.2").unwrap_err();
        assert_eq!(err, DecodeError::MalformedRecord { found: 1 });
    }

    #[test]
    fn rejects_too_few_fields() {
        let err = decode("temp:1   pressure:2   humidity:3").unwrap_err();
        assert_eq!(err, DecodeError::MalformedRecord { found: 3 });
    }

    #[test]
    fn rejects_too_many_fields() {
        let err = decode("a:1   b:2   c:3   d:4   e:5   f:6").unwrap_err();
        assert_eq!(err, DecodeError::MalformedRecord { found: 6 });
    }

    #[test]
    fn rejects_empty_payload() {
        let err = decode("").unwrap_err();
        assert_eq!(err, DecodeError::MalformedRecord { found: 1 });
    }

    #[test]
    fn rejects_field_without_colon() {
        let err = decode("temp:1   pressure:2   humidity-3   latitude:4   longitude:5")
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedField {
                field: String::from("humidity-3"),
            }
        );
    }

    #[test]
    fn trims_value_whitespace() {
        let payload = "temp: 23.5   pressure:1013.2   humidity:45   latitude: 1   longitude:2";
        let reading = decode(payload).unwrap();
        assert_eq!(reading.temperature, "23.5");
        assert_eq!(reading.latitude, "1");
    }
}

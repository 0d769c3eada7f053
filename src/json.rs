//! Field-level JSON rules shared by every model
//!
//! Models derive serde impls with `#[serde(default)]` so a missing key leaves
//! the field at its default value. Helpers from this module are attached to
//! individual fields where the wire format differs from plain serde:
//!
//! | field | helper |
//! |---|---|
//! | `String` | `#[serde(with = "json::string")]` |
//! | `Vec<T>` | `#[serde(with = "json::list")]` |
//! | `HashMap<String, T>`, required primitives and objects | `#[serde(deserialize_with = "json::or_default")]` |
//! | `Option<E>` where `E: WireEnum` | `#[serde(with = "json::enumeration")]` |
//! | `E` where `E: WireEnum` | `#[serde(with = "json::enumeration::required")]` |
//! | `DateTime<Utc>` | `#[serde(with = "json::timestamp")]` |
//! | `Option<DateTime<Utc>>` | `#[serde(with = "json::timestamp::optional")]` |

use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde_json::Value;

use crate::wire::WireEnum;

/// Empty string is written as `null`, `null` is read as empty string
pub mod string {
    use super::*;

    pub fn serialize<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.serialize_str(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Empty list is written as `null`, `null` is read as empty list
pub mod list {
    use super::*;

    pub fn serialize<S, T>(value: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize
    {
        if value.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.collect_seq(value)
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Read `null` as the default value of the field
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lenient optional enumerations
///
/// Unknown wire strings and non-string values are dropped (`None`)
/// instead of failing the whole model.
pub mod enumeration {
    use super::*;

    pub fn serialize<S, E>(value: &Option<E>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        E: WireEnum
    {
        match value {
            Some(value) => serializer.serialize_str(value.as_str()),
            None => serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D, E>(deserializer: D) -> Result<Option<E>, D::Error>
    where
        D: Deserializer<'de>,
        E: WireEnum
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => None,

            Value::String(value) => {
                let parsed = E::from_wire(&value);

                if parsed.is_none() {
                    tracing::trace!("Dropping unknown {} value: {value}", E::NAME);
                }

                parsed
            }

            value => {
                tracing::trace!("Dropping non-string {} value: {value}", E::NAME);

                None
            }
        })
    }

    /// Same as the parent module, but for required fields
    ///
    /// The value is always written. Missing, `null` and unknown values
    /// are read as the first declared value of the enumeration.
    pub mod required {
        use super::*;

        #[inline]
        pub fn serialize<S, E>(value: &E, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            E: WireEnum
        {
            serializer.serialize_str(value.as_str())
        }

        pub fn deserialize<'de, D, E>(deserializer: D) -> Result<E, D::Error>
        where
            D: Deserializer<'de>,
            E: WireEnum + Default
        {
            Ok(super::deserialize(deserializer)?.unwrap_or_default())
        }
    }
}

/// ISO 8601 UTC timestamps
///
/// Written as `2024-01-02T03:04:05.000Z`. Reading accepts any RFC 3339
/// string as well as timestamps without offset, which are treated as UTC.
/// Read values are truncated to milliseconds, the precision they are
/// written with. `null` is read as the Unix epoch.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SubsecRound, TimeZone, Utc};
    use serde::de::Error;

    use super::*;

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    #[inline]
    pub fn to_wire(time: &DateTime<Utc>) -> String {
        time.format(FORMAT).to_string()
    }

    pub fn from_wire(value: &str) -> Option<DateTime<Utc>> {
        let time = match DateTime::parse_from_rfc3339(value) {
            Ok(time) => time.with_timezone(&Utc),

            Err(_) => {
                let time = NaiveDateTime::parse_from_str(value.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f").ok()?;

                Utc.from_utc_datetime(&time)
            }
        };

        Some(time.trunc_subsecs(3))
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_wire(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) => from_wire(&value)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {value}"))),

            None => Ok(DateTime::default())
        }
    }

    /// Same as the parent module, but `null` is read as `None`
    pub mod optional {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error> {
            match value {
                Some(time) => serializer.serialize_str(&to_wire(time)),
                None => serializer.serialize_none()
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(value) => from_wire(&value)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {value}"))),

                None => Ok(None)
            }
        }
    }

    #[test]
    fn test_timestamp_formats() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        assert_eq!(to_wire(&time), "2024-01-02T03:04:05.000Z");

        assert_eq!(from_wire("2024-01-02T03:04:05.000Z"), Some(time));
        assert_eq!(from_wire("2024-01-02T03:04:05Z"), Some(time));
        assert_eq!(from_wire("2024-01-02T03:04:05"), Some(time));
        assert_eq!(from_wire("2024-01-02T05:04:05+02:00"), Some(time));

        // PlayFab sends up to 7 fractional digits
        let precise = from_wire("2024-01-02T03:04:05.1234567Z").unwrap();

        assert_eq!(precise.timestamp_subsec_millis(), 123);
        assert_eq!(precise.timestamp_subsec_nanos(), 123_000_000);
        assert_eq!(to_wire(&precise), "2024-01-02T03:04:05.123Z");
        assert_eq!(from_wire(&to_wire(&precise)), Some(precise));

        assert_eq!(from_wire("2024-01-02T03:04:05.9999999"), from_wire("2024-01-02T03:04:05.999Z"));

        assert_eq!(from_wire("yesterday"), None);
    }
}

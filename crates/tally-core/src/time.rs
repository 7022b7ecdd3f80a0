//! Timestamp helpers.
//!
//! Records carry timestamps with whatever offset they were produced in. All
//! comparisons inside the merge engine happen on UTC-normalized values.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Timestamp type used by every record.
pub type Timestamp = DateTime<FixedOffset>;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Re-express a timestamp with a zero offset. The instant is unchanged.
#[must_use]
pub fn to_utc(timestamp: Timestamp) -> Timestamp {
    timestamp.with_timezone(&Utc).fixed_offset()
}

/// Current time in UTC.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().fixed_offset()
}

/// Parse an RFC 3339 timestamp.
///
/// Strings without offset information are accepted and treated as UTC.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, chrono::ParseError> {
    let raw = raw.trim();
    let rfc3339_error = match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => return Ok(timestamp),
        Err(error) => error,
    };

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or(rfc3339_error)
}

/// Format a timestamp as RFC 3339, keeping its offset.
#[must_use]
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
}

/// Serde adapter for required timestamps.
pub mod serde_timestamp {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_timestamp, parse_timestamp, Timestamp};

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional timestamps. Use together with `#[serde(default)]`.
pub mod serde_timestamp_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_timestamp, parse_timestamp, Timestamp};

    pub fn serialize<S: Serializer>(
        value: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(timestamp) => serializer.serialize_some(&format_timestamp(timestamp)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn to_utc_keeps_instant_and_drops_offset() {
        let local = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .unwrap();
        let utc = to_utc(local);

        assert_eq!(utc, local);
        assert_eq!(utc.offset().local_minus_utc(), 0);
        assert_eq!(utc.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn parse_timestamp_accepts_offsets() {
        let parsed = parse_timestamp("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 7200);
        assert_eq!(to_utc(parsed).to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn parse_timestamp_treats_naive_values_as_utc() {
        let parsed = parse_timestamp("2024-03-01T10:00:00").unwrap();
        assert_eq!(parsed, parse_timestamp("2024-03-01T10:00:00Z").unwrap());

        let with_space = parse_timestamp("2024-03-01 10:00:00.250").unwrap();
        assert_eq!(with_space.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }
}

//! Wire format for timestamps.
//!
//! Timestamps go out as UTC ISO-8601 with a fixed six-digit fraction
//! (`2024-05-01T12:00:00.000000Z`). Chrono's default RFC 3339 output drops
//! trailing zero digits, which breaks plain string ordering between two
//! values; a fixed width keeps lexical order equal to chronological order.

use chrono::SecondsFormat;
use serde::Serializer;

use crate::types::Timestamp;

/// Format a timestamp in the fixed-width wire format.
pub fn format(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `serialize_with` adapter for [`Timestamp`] fields.
pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "crate::timestamp::serialize")]
        at: Timestamp,
    }

    #[test]
    fn whole_seconds_keep_six_fraction_digits() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format(&ts), "2024-05-01T12:00:00.000000Z");
    }

    #[test]
    fn string_order_matches_time_order() {
        let earlier = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
            + chrono::Duration::microseconds(100_000);
        let later = earlier + chrono::Duration::microseconds(20_000);

        assert!(format(&later) > format(&earlier));
    }

    #[test]
    fn serializes_as_json_string() {
        let ts = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let json = serde_json::to_value(Wrapper { at: ts }).unwrap();
        assert_eq!(json["at"], "2023-12-31T23:59:59.000000Z");
    }
}

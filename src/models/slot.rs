//! Availability slot model and `YYYY-MM-DD` / `HH:MM` wire format helpers.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A candidate reservable time interval for a resource on a date.
///
/// Slots are never persisted: availability answers are derived by
/// subtracting live reservations from the static per-resource offer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

/// Half-open interval overlap test: `[a_start, a_end)` against `[b_start, b_end)`.
pub fn overlaps(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Strict `YYYY-MM-DD` parser: zero-padded shape first, then calendar
/// validity via chrono (which alone would accept `2026-1-2`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    let shaped = b.len() == 10
        && b.iter()
            .enumerate()
            .all(|(i, c)| if i == 4 || i == 7 { *c == b'-' } else { c.is_ascii_digit() });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Strict `HH:MM` parser, rejecting unpadded (`9:00`) and out-of-range
/// (`99:99`) values.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let b = s.as_bytes();
    let shaped = b.len() == 5
        && b.iter()
            .enumerate()
            .all(|(i, c)| if i == 2 { *c == b':' } else { c.is_ascii_digit() });
    if !shaped {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Serde adapter for `HH:MM` times (chrono's default carries seconds).
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

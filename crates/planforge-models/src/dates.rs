//! Lenient calendar-date handling for loosely-typed entity snapshots.
//!
//! The upstream entity store stores dates as plain strings. A field can be
//! missing, null, empty, or hold a value that never was a date. All of those
//! deserialize to `None`; only a valid `YYYY-MM-DD` string yields a date.

use chrono::NaiveDate;

/// Wire format for all calendar-date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a raw date string, returning `None` when it is empty or malformed.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Serde adapter for `Option<NaiveDate>` fields that must never fail a
/// record over a bad date. Use with `#[serde(default, with = "lenient_date")]`.
pub mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_date, DATE_FORMAT};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_date))
    }
}

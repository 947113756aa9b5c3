//! Display dates as they appear in the sample data.
//!
//! Screens store dates as display strings, mixing `DD-MM-YYYY` with ISO forms.
//! They are normalized once when a record is built; comparisons only ever use
//! the parsed day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day number of 1970-01-01 counted from 0001-01-01 (CE)
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d.%m.%Y", "%d/%m/%Y"];

/// Parse a display date.
///
/// Accepts `DD-MM-YYYY`, `DD.MM.YYYY`, `DD/MM/YYYY`, `YYYY-MM-DD` and ISO
/// datetimes such as `2024-03-15T14:02:26.123Z` (the time part is ignored).
pub fn parse_display_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_part = trimmed
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

/// Date field of a record: the original display string plus its parsed day.
///
/// Serialized as the plain display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RecordDate {
    raw: String,
    day: Option<NaiveDate>,
}

impl RecordDate {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.trim().to_string(),
            day: parse_display_date(raw),
        }
    }

    pub fn from_day(day: NaiveDate) -> Self {
        Self {
            raw: day.format("%d-%m-%Y").to_string(),
            day: Some(day),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn day(&self) -> Option<NaiveDate> {
        self.day
    }

    pub fn is_valid(&self) -> bool {
        self.day.is_some()
    }

    /// Days since 1970-01-01, `None` for unparseable input
    pub fn epoch_day(&self) -> Option<i64> {
        self.day
            .map(|d| i64::from(d.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE)
    }
}

impl From<String> for RecordDate {
    fn from(raw: String) -> Self {
        RecordDate::parse(&raw)
    }
}

impl From<RecordDate> for String {
    fn from(date: RecordDate) -> Self {
        date.raw
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

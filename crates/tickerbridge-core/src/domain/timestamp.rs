use std::fmt::{Display, Formatter};

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, UtcOffset};

use crate::ValidationError;

const CALENDAR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Millisecond-precision UTC rendering, e.g. `2023-11-14T22:13:20.000Z`.
const ISO_8601_MILLIS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Instant guaranteed to carry a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn from_unix_seconds(seconds: i64) -> Result<Self, ValidationError> {
        OffsetDateTime::from_unix_timestamp(seconds)
            .map(Self)
            .map_err(|_| ValidationError::TimestampOutOfRange { value: seconds })
    }

    /// Parses a `YYYY-MM-DD` calendar date as midnight UTC.
    ///
    /// Full RFC 3339 timestamps are accepted too and shifted to UTC.
    pub fn parse_date(field: &'static str, input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if let Ok(date) = Date::parse(trimmed, CALENDAR_DATE) {
            return Ok(Self(date.midnight().assume_utc()));
        }

        OffsetDateTime::parse(trimmed, &Rfc3339)
            .map(|value| Self(value.to_offset(UtcOffset::UTC)))
            .map_err(|_| ValidationError::InvalidDate {
                field,
                value: input.to_owned(),
            })
    }

    pub fn checked_sub_days(self, days: u32) -> Option<Self> {
        self.0.checked_sub(Duration::days(i64::from(days))).map(Self)
    }

    pub const fn unix_seconds(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn format_date(self) -> String {
        self.0
            .format(CALENDAR_DATE)
            .expect("UtcDateTime must be calendar-date formattable")
    }

    pub fn format_iso8601(self) -> String {
        self.0
            .format(ISO_8601_MILLIS)
            .expect("UtcDateTime must be ISO-8601 formattable")
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso8601())
    }
}

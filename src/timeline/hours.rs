//! Venue operating hours.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// `chrono` format for a wall-clock time such as `09:00`.
pub const TIME_FORMAT: &str = "%H:%M";

/// Date a time-only value is anchored on (year 0, January 1st).
fn time_only_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(0, 1, 1).unwrap_or_default()
}

/// Keeps only the hour and minute of an instant.
fn wall_clock(instant: &NaiveDateTime) -> NaiveTime {
    NaiveTime::from_hms_opt(instant.hour(), instant.minute(), 0).unwrap_or_default()
}

/// Opening and closing bounds of the venue.
///
/// Bounds are instants. When built from wall-clock times they sit on the
/// time-only anchor date, so comparing them directly against a dated request
/// is rarely meaningful; [`OperatingHours::contains_wall_clock`] is the test
/// that ignores the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatingHours {
    opening: NaiveDateTime,
    closing: NaiveDateTime,
}

impl OperatingHours {
    /// Builds hours from two instants, taken as-is.
    pub const fn from_instants(opening: NaiveDateTime, closing: NaiveDateTime) -> Self {
        Self { opening, closing }
    }

    /// Builds hours from wall-clock times anchored on the time-only date.
    pub fn from_wall_clock(opening: NaiveTime, closing: NaiveTime) -> Self {
        let date = time_only_date();
        Self {
            opening: date.and_time(opening),
            closing: date.and_time(closing),
        }
    }

    /// Parses `HH:MM` bounds, e.g. `OperatingHours::parse("09:00", "22:00")`.
    pub fn parse(opening: &str, closing: &str) -> Result<Self, chrono::ParseError> {
        let opening = NaiveTime::parse_from_str(opening, TIME_FORMAT)?;
        let closing = NaiveTime::parse_from_str(closing, TIME_FORMAT)?;
        Ok(Self::from_wall_clock(opening, closing))
    }

    pub const fn opening(&self) -> NaiveDateTime {
        self.opening
    }

    pub const fn closing(&self) -> NaiveDateTime {
        self.closing
    }

    /// Returns true if the hour and minute of `instant` lie strictly between
    /// the opening and closing hour and minute. Dates and seconds are ignored.
    pub fn contains_wall_clock(&self, instant: NaiveDateTime) -> bool {
        let t = wall_clock(&instant);
        wall_clock(&self.opening) < t && t < wall_clock(&self.closing)
    }
}

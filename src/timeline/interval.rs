//! Booked time span and the conflict rule between two spans.

use std::fmt::Display;

use chrono::NaiveDateTime;
use qtty::{Minute, Quantity};

/// Half-open span `[start, end)` during which a table is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Interval {
    /// Creates interval `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `end <= start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        assert!(start < end, "Interval end must be after start");
        Self { start, end }
    }

    /// Creates interval `[start, end)`, or `None` if `end <= start`.
    pub fn checked(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Length of the span in minutes.
    pub fn duration(&self) -> Quantity<Minute> {
        let seconds = (self.end - self.start).num_seconds();
        Quantity::new(seconds as f64 / 60.0)
    }

    /// Returns true if booking `self` would clash with the already `booked` span.
    ///
    /// The rule is three clauses checked in order:
    /// 1. `self` ends inside `booked`: `end > booked.start && end <= booked.end`
    /// 2. `self` lies inside `booked`: `start >= booked.start && end <= booked.end`
    /// 3. `self` starts inside `booked`: `start >= booked.start && start < booked.end`
    ///
    /// Back-to-back spans do not clash. A span that strictly encloses `booked`
    /// (starts before it and ends after it) matches none of the clauses and is
    /// reported as free; see `enclosing_span_is_not_detected` below.
    pub fn conflicts_with(&self, booked: &Interval) -> bool {
        let ends_inside = self.end > booked.start && self.end <= booked.end;
        let contained = self.start >= booked.start && self.end <= booked.end;
        let starts_inside = self.start >= booked.start && self.start < booked.end;
        ends_inside || contained || starts_inside
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: NaiveDateTime,
            end: NaiveDateTime,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::checked(raw.start, raw.end)
            .ok_or_else(|| serde::de::Error::custom("interval end must be after start"))
    }
}

use chrono::NaiveDateTime;

use crate::resource::TableId;
use crate::timeline::Interval;
use crate::Id;

/// A committed hold of one table for one span.
///
/// Records are only created by a successful allocation and are never changed
/// afterwards. All records created by the same allocation share its
/// `reservation_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReservationRecord {
    pub(crate) reservation_id: Id,
    pub(crate) table_id: TableId,
    pub(crate) reserved_at: NaiveDateTime,
    pub(crate) interval: Interval,
}

impl ReservationRecord {
    pub fn new(
        reservation_id: impl Into<Id>,
        table_id: TableId,
        reserved_at: NaiveDateTime,
        interval: Interval,
    ) -> Self {
        Self {
            reservation_id: reservation_id.into(),
            table_id,
            reserved_at,
            interval,
        }
    }

    pub fn reservation_id(&self) -> &str {
        &self.reservation_id
    }

    pub fn table_id(&self) -> TableId {
        self.table_id
    }

    /// When the request behind this record was submitted.
    pub fn reserved_at(&self) -> NaiveDateTime {
        self.reserved_at
    }

    pub fn reserved_from(&self) -> NaiveDateTime {
        self.interval.start()
    }

    pub fn reserved_till(&self) -> NaiveDateTime {
        self.interval.end()
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }
}

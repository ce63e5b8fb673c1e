//! Greedy table walk.

use crate::registry::{Registry, ReservationRecord};
use crate::resource::TableId;
use crate::timeline::Interval;

use super::ordering::by_capacity;

/// Tables picked by one walk and the seats they add up to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Selection {
    pub(crate) tables: Vec<TableId>,
    pub(crate) seated: u64,
}

impl Selection {
    pub(crate) fn covers(&self, party_size: u64) -> bool {
        self.seated >= party_size
    }
}

/// Returns true if a table with `records` may be offered for `wanted`.
///
/// A table that was never booked is free. Otherwise it is taken as soon as
/// one of its records does not clash with `wanted`, even if an earlier record
/// did. This lets a table be double-booked when it already holds several
/// records; see `table_free_against_any_record_is_eligible` in the tests.
pub(crate) fn is_available(records: &[ReservationRecord], wanted: &Interval) -> bool {
    records.is_empty() || records.iter().any(|r| !wanted.conflicts_with(r.interval()))
}

/// Walks the tables from smallest to largest, taking every available one
/// until the party is seated or the tables run out.
///
/// The result may fall short of `party_size`; the caller decides what to do
/// with it. Nothing is committed here.
pub(crate) fn select_tables(registry: &Registry, party_size: u64, wanted: &Interval) -> Selection {
    let mut selection = Selection::default();

    for table in by_capacity(registry.tables()) {
        if selection.covers(party_size) {
            break;
        }

        if !is_available(registry.reservations_for(table.id()), wanted) {
            log::debug!("Table {} is booked during {}", table.id(), wanted);
            continue;
        }

        selection.seated += u64::from(table.capacity());
        selection.tables.push(table.id());
    }

    selection
}

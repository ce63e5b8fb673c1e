use crate::resource::{Capacity, Table, TableId};
use crate::timeline::Interval;
use chrono::NaiveDateTime;
use qtty::{Minute, Quantity};
use std::collections::HashMap;
pub mod errors;
pub mod record;
pub use errors::*;
pub use record::*;


/// Pool of tables plus the reservation history of each table.
///
/// A `Registry` owns a fixed set of [`Table`]s with dense ids `0..len()` and,
/// per table, an append-only list of [`ReservationRecord`]s kept in booking
/// order (not in chronological order of the booked spans).
///
/// The registry is a plain value owned by the caller. The allocation engine
/// takes it by `&mut`, which makes reading availability and committing the
/// result one exclusive step.
///
/// # Internal Structure
/// - `tables`: tables indexed by id
/// - `reservations`: `HashMap` from table id to its records; a table with no
///   entry has never been booked
///
/// # Examples
///
/// ```
/// use seatplan::registry::Registry;
///
/// let registry = Registry::with_uniform(100, 5).unwrap();
/// assert_eq!(registry.len(), 100);
/// assert_eq!(registry.total_capacity(), 500);
/// assert!(registry.reservations_for(0).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    tables: Vec<Table>,
    reservations: HashMap<TableId, Vec<ReservationRecord>>,
}

impl Registry {
    /// Creates a registry with no tables. Call [`Registry::initialize`] before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `count` tables that each seat `capacity` people.
    pub fn with_uniform(count: usize, capacity: Capacity) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.initialize(count, capacity)?;
        Ok(registry)
    }

    /// Creates one table per entry of `capacities`, ids in iteration order.
    pub fn from_capacities<I>(capacities: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Capacity>,
    {
        let mut registry = Self::new();
        registry.reset(capacities.into_iter().collect())?;
        Ok(registry)
    }

    /// Replaces the pool with `count` tables of `capacity` seats and drops all
    /// reservation history.
    ///
    /// Meant to run once at startup. On error the registry is left untouched.
    pub fn initialize(&mut self, count: usize, capacity: Capacity) -> Result<(), RegistryError> {
        self.reset(vec![capacity; count])
    }

    fn reset(&mut self, capacities: Vec<Capacity>) -> Result<(), RegistryError> {
        if let Some(table) = capacities.iter().position(|&c| c == 0) {
            return Err(RegistryError::ZeroCapacity { table });
        }

        self.tables = capacities
            .into_iter()
            .enumerate()
            .map(|(id, capacity)| Table::new(id, capacity))
            .collect();
        self.reservations.clear();

        log::info!(
            "Registry initialized with {} tables seating {} people in total",
            self.tables.len(),
            self.total_capacity()
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// All tables in id order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.get(id)
    }

    /// Sum of the capacities of every table.
    pub fn total_capacity(&self) -> u64 {
        self.tables.iter().map(|t| u64::from(t.capacity())).sum()
    }

    /// Records for `id` in booking order; empty if the table was never booked
    /// or does not exist.
    pub fn reservations_for(&self, id: TableId) -> &[ReservationRecord] {
        self.reservations.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of records across all tables.
    pub fn reservation_count(&self) -> usize {
        self.reservations.values().map(Vec::len).sum()
    }

    /// Iterates over every record, table by table in id order.
    pub fn records(&self) -> impl Iterator<Item = &ReservationRecord> + '_ {
        self.tables
            .iter()
            .flat_map(move |t| self.reservations_for(t.id()).iter())
    }

    /// Total booked time of a table.
    ///
    /// Note: overlapping records are counted twice.
    pub fn booked_duration(&self, id: TableId) -> Quantity<Minute> {
        self.reservations_for(id)
            .iter()
            .map(|r| r.interval().duration())
            .fold(Quantity::new(0.0), |acc, dur| acc + dur)
    }

    /// Appends a record for `id`.
    ///
    /// Availability is NOT checked here; callers are expected to have done so.
    pub fn commit(
        &mut self,
        reservation_id: &str,
        id: TableId,
        interval: Interval,
        reserved_at: NaiveDateTime,
    ) -> Result<(), RegistryError> {
        if id >= self.tables.len() {
            return Err(RegistryError::UnknownTable(id));
        }
        self.reservations
            .entry(id)
            .or_default()
            .push(ReservationRecord::new(reservation_id, id, reserved_at, interval));
        Ok(())
    }

    /// Appends one record per table in `ids`, all or nothing.
    pub fn commit_all(
        &mut self,
        reservation_id: &str,
        ids: &[TableId],
        interval: Interval,
        reserved_at: NaiveDateTime,
    ) -> Result<(), RegistryError> {
        if let Some(&unknown) = ids.iter().find(|&&id| id >= self.tables.len()) {
            return Err(RegistryError::UnknownTable(unknown));
        }
        for &id in ids {
            self.commit(reservation_id, id, interval, reserved_at)?;
        }
        Ok(())
    }
}

//! Seating table resource.

use super::{Capacity, TableId};

/// A seating table with a fixed capacity.
///
/// Tables are created by the [`Registry`](crate::registry::Registry) when it is
/// initialized and are never mutated afterwards. Ids are dense and 0-based, so
/// a table's id is also its position in the registry pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    id: TableId,
    capacity: Capacity,
}

impl Table {
    /// Creates a table. Capacity validation is the registry's job.
    pub(crate) const fn new(id: TableId, capacity: Capacity) -> Self {
        Self { id, capacity }
    }

    pub const fn id(&self) -> TableId {
        self.id
    }

    /// Number of people this table seats.
    pub const fn capacity(&self) -> Capacity {
        self.capacity
    }
}

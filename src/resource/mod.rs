//! Seating resources.
//!
//! A venue owns a fixed pool of tables. Each table seats a fixed number of
//! people; large parties are seated across several tables, so allocation works
//! on the summed capacity of a set of tables rather than on a single one.

mod table;

pub use table::Table;

/// Dense, 0-based table identifier.
pub type TableId = usize;

/// Number of people a table seats.
pub type Capacity = u32;

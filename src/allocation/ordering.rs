//! Order in which tables are offered to a party.

use crate::resource::Table;

/// Returns the tables sorted by ascending capacity.
///
/// The sort is stable, so tables of equal capacity keep id order.
pub fn by_capacity(tables: &[Table]) -> Vec<Table> {
    let mut ordered = tables.to_vec();
    ordered.sort_by_key(Table::capacity);
    ordered
}

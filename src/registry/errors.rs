use thiserror::Error;

use crate::resource::TableId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A table was declared with room for nobody
    #[error("Table {table} must seat at least one person")]
    ZeroCapacity { table: TableId },

    /// Table id is outside the registry pool
    #[error("Table {0} does not exist")]
    UnknownTable(TableId),
}

//! Venue configuration.

use chrono::NaiveTime;
use thiserror::Error;

use crate::registry::{Registry, RegistryError};
use crate::resource::Capacity;
use crate::timeline::{OperatingHours, TIME_FORMAT};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {field} time {value:?}: expected HH:MM")]
    InvalidTime { field: &'static str, value: String },

    #[error("Closing time must be after opening time")]
    ClosingNotAfterOpening,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Configuration of the table pool and opening hours.
///
/// Every table gets the same capacity. Times are wall-clock `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VenueConfig {
    /// Number of tables in the pool.
    pub table_count: usize,
    /// Seats per table.
    pub capacity_per_table: Capacity,
    pub opening_time: String,
    pub closing_time: String,
}

impl VenueConfig {
    fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ConfigError> {
        NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| ConfigError::InvalidTime {
            field,
            value: value.to_string(),
        })
    }

    /// Parses the opening and closing times.
    pub fn operating_hours(&self) -> Result<OperatingHours, ConfigError> {
        let opening = Self::parse_time("opening", &self.opening_time)?;
        let closing = Self::parse_time("closing", &self.closing_time)?;
        if closing <= opening {
            return Err(ConfigError::ClosingNotAfterOpening);
        }
        Ok(OperatingHours::from_wall_clock(opening, closing))
    }

    /// Builds a freshly initialized registry for this venue.
    pub fn build_registry(&self) -> Result<Registry, ConfigError> {
        Ok(Registry::with_uniform(
            self.table_count,
            self.capacity_per_table,
        )?)
    }
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            table_count: 100,
            capacity_per_table: 5,
            opening_time: "09:00".to_string(),
            closing_time: "22:00".to_string(),
        }
    }
}

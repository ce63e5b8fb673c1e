//! Time spans and operating hours.

mod hours;
mod interval;

pub use hours::{OperatingHours, TIME_FORMAT};
pub use interval::Interval;

//! Table allocation.
//!
//! Turns a [`ReservationRequest`] into committed reservation records, or into
//! an [`AllocationError`]. The algorithm is greedy and makes a single pass:
//!
//! 1. **Validation**: empty span, start before submission, start outside
//!    opening hours, party size below one. First failure wins.
//! 2. **Ordering**: tables are sorted by ascending capacity; ties keep id order.
//! 3. **Walk**: every table that is available for the requested span is taken
//!    and its full capacity credited, until the party is seated.
//! 4. **Commit**: if the credited seats cover the party, one record per chosen
//!    table is appended to the registry. Otherwise nothing is written.
//!
//! There is no backtracking and no attempt to use fewer tables.
//!
//! # Known gaps
//!
//! These follow the booking rules as they stand and are kept on purpose:
//!
//! - A span that strictly encloses an existing booking is not seen as a clash
//!   ([`Interval::conflicts_with`](crate::timeline::Interval::conflicts_with)).
//! - A table with several records is available if *any* record does not clash.
//! - The opening hours fallback only looks at the start time.
//!
//! # Module Structure
//!
//! - [`error`] - Allocation failures
//! - `validate` - Request checks
//! - [`ordering`] - Table ordering
//! - `engine` - Table walk

mod engine;
pub mod error;
pub mod ordering;
mod validate;

#[cfg(test)]
mod tests;

pub use error::AllocationError;

use crate::registry::Registry;
use crate::request::ReservationRequest;
use crate::resource::TableId;
use crate::timeline::OperatingHours;
use crate::Id;

use engine::select_tables;
use validate::validate;

/// Outcome of a successful allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    reservation_id: Id,
    tables: Vec<TableId>,
    seated: u64,
}

impl Allocation {
    /// Reference shared by every record this allocation committed.
    pub fn reservation_id(&self) -> &str {
        &self.reservation_id
    }

    /// Assigned tables, in the order they were picked.
    pub fn tables(&self) -> &[TableId] {
        &self.tables
    }

    /// Combined capacity of the assigned tables.
    pub fn seated(&self) -> u64 {
        self.seated
    }
}

/// Strategy that seats a request against a registry.
pub trait Allocator {
    /// Seats `request` within `hours`, committing to `registry` on success.
    ///
    /// On error the registry must be left unchanged.
    fn allocate(
        &self,
        registry: &mut Registry,
        request: &ReservationRequest,
        hours: &OperatingHours,
    ) -> Result<Allocation, AllocationError>;
}

/// Smallest-tables-first greedy allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAllocator;

impl Allocator for GreedyAllocator {
    fn allocate(
        &self,
        registry: &mut Registry,
        request: &ReservationRequest,
        hours: &OperatingHours,
    ) -> Result<Allocation, AllocationError> {
        let validated = validate(request, hours).inspect_err(|e| {
            log::debug!("Rejected request from {}: {}", request.customer_id, e);
        })?;

        let selection = select_tables(registry, validated.party_size, &validated.interval);
        if !selection.covers(validated.party_size) {
            log::warn!(
                "Cannot seat {} people during {}: only {} seats free",
                validated.party_size,
                validated.interval,
                selection.seated
            );
            return Err(AllocationError::CapacityUnavailable {
                party_size: request.party_size,
            });
        }

        let reservation_id = crate::generate_id();
        registry.commit_all(
            &reservation_id,
            &selection.tables,
            validated.interval,
            request.submitted_at,
        )?;

        log::info!(
            "Reservation {} seats {} people at tables {:?} during {}",
            reservation_id,
            validated.party_size,
            selection.tables,
            validated.interval
        );

        Ok(Allocation {
            reservation_id,
            tables: selection.tables,
            seated: selection.seated,
        })
    }
}

/// Seats `request` with the [`GreedyAllocator`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use seatplan::allocation::{allocate, AllocationError};
/// use seatplan::registry::Registry;
/// use seatplan::request::ReservationRequest;
/// use seatplan::timeline::OperatingHours;
///
/// let mut registry = Registry::from_capacities([2, 3, 5]).unwrap();
/// let hours = OperatingHours::parse("09:00", "22:00").unwrap();
///
/// let day = NaiveDate::from_ymd_opt(2030, 5, 17).unwrap();
/// let request = ReservationRequest::new(
///     "ada",
///     4,
///     "555-0100",
///     day.and_hms_opt(8, 0, 0).unwrap(),
///     day.and_hms_opt(19, 0, 0).unwrap(),
///     day.and_hms_opt(21, 0, 0).unwrap(),
/// );
///
/// // Two smallest tables first: 2 + 3 seats
/// let first = allocate(&mut registry, &request, &hours).unwrap();
/// assert_eq!(first.tables(), &[0, 1]);
///
/// // Those are now taken, the 5-seat table is left
/// let second = allocate(&mut registry, &request, &hours).unwrap();
/// assert_eq!(second.tables(), &[2]);
///
/// assert_eq!(
///     allocate(&mut registry, &request, &hours),
///     Err(AllocationError::CapacityUnavailable { party_size: 4 })
/// );
/// ```
pub fn allocate(
    registry: &mut Registry,
    request: &ReservationRequest,
    hours: &OperatingHours,
) -> Result<Allocation, AllocationError> {
    GreedyAllocator.allocate(registry, request, hours)
}

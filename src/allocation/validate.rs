//! Request validation ahead of the table walk.

use crate::request::ReservationRequest;
use crate::timeline::{Interval, OperatingHours};

use super::error::AllocationError;

/// A request that passed every check, reduced to what the walk needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Validated {
    pub(crate) interval: Interval,
    pub(crate) party_size: u64,
}

/// Checks a request in a fixed order; the first failing check wins.
///
/// 1. The span must be non-empty.
/// 2. The span must not start before the request was submitted.
/// 3. If the span starts before opening or ends after closing, the start's
///    wall-clock time must lie strictly inside opening hours. Only the start
///    is checked at this point, the end is not.
/// 4. The party must have at least one person.
pub(crate) fn validate(
    request: &ReservationRequest,
    hours: &OperatingHours,
) -> Result<Validated, AllocationError> {
    let interval = Interval::checked(request.start, request.end)
        .ok_or(AllocationError::EndNotAfterStart)?;

    if request.start < request.submitted_at {
        return Err(AllocationError::StartBeforeSubmission);
    }

    if (request.start < hours.opening() || request.end > hours.closing())
        && !hours.contains_wall_clock(request.start)
    {
        return Err(AllocationError::OutsideOperatingHours);
    }

    let party_size = u64::try_from(request.party_size)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(AllocationError::InvalidPartySize(request.party_size))?;

    Ok(Validated {
        interval,
        party_size,
    })
}

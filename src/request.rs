//! Incoming table reservation request.

use chrono::NaiveDateTime;

/// A request to seat a party for a span of time.
///
/// Built by intake from user input and consumed once by the allocator; it is
/// not retained. Fields are not validated here: the allocator rejects an empty
/// span, a start before `submitted_at`, a start outside opening hours and a
/// party size below one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReservationRequest {
    /// Opaque customer identifier.
    pub customer_id: String,
    /// Number of people to seat.
    pub party_size: i64,
    /// Contact string, usually a phone number.
    pub contact: String,
    /// When the request was made.
    pub submitted_at: NaiveDateTime,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ReservationRequest {
    pub fn new(
        customer_id: impl Into<String>,
        party_size: i64,
        contact: impl Into<String>,
        submitted_at: NaiveDateTime,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            party_size,
            contact: contact.into(),
            submitted_at,
            start,
            end,
        }
    }
}

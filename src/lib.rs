//! seatplan - table allocation for restaurant reservations
//!
//! Seats parties across one or more tables of fixed capacity for a requested
//! span of time, without double-booking a table and only within the venue's
//! opening hours.
//!
//! The pieces, leaf first:
//! - [`resource`]: tables and their capacity
//! - [`timeline`]: booked spans, the clash rule and opening hours
//! - [`registry`]: the table pool and its reservation history
//! - [`allocation`]: request validation and the greedy table walk
//! - [`intake`] and [`config`]: textual input and venue setup

pub mod allocation;
pub mod config;
pub mod intake;
pub mod registry;
pub mod request;
pub mod resource;
pub mod timeline;

pub use allocation::{allocate, Allocation, AllocationError};
pub use registry::Registry;
pub use request::ReservationRequest;

/// Identifier type used for reservations.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}

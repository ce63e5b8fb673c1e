//! Parsing of the textual `table` command into a [`ReservationRequest`].
//!
//! The command arguments are positional and space separated:
//!
//! ```text
//! {customer} {number_of_people} {contact} {start} {end}
//! ```
//!
//! with `start` and `end` written as [`DATE_TIME_FORMAT`], e.g.
//! `2030-05-17::19:00`.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::request::ReservationRequest;

/// `chrono` format for request start and end, e.g. `2030-05-17::19:00`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d::%H:%M";

/// Number of positional arguments a `table` command needs.
pub const TABLE_ARGUMENTS: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("invalid number of arguments: expected {expected}, found {found}")]
    MissingArguments { expected: usize, found: usize },

    #[error("error in parsing number of people: {0:?}")]
    InvalidPartySize(String),

    #[error("error in parsing reservation {field} time: {value:?}")]
    InvalidDateTime { field: &'static str, value: String },
}

fn parse_date_time(field: &'static str, value: &str) -> Result<NaiveDateTime, IntakeError> {
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).map_err(|_| {
        IntakeError::InvalidDateTime {
            field,
            value: value.to_string(),
        }
    })
}

/// Builds a request from the arguments that follow the `table` keyword.
///
/// `submitted_at` is the moment the command was received. Arguments past the
/// fifth are ignored. Values are only parsed here; whether they make a valid
/// reservation is decided by the allocator.
pub fn parse_table_arguments<S: AsRef<str>>(
    args: &[S],
    submitted_at: NaiveDateTime,
) -> Result<ReservationRequest, IntakeError> {
    let [customer, people, contact, start, end, ..] = args else {
        return Err(IntakeError::MissingArguments {
            expected: TABLE_ARGUMENTS,
            found: args.len(),
        });
    };

    let people = people.as_ref();
    let party_size = people
        .parse::<i64>()
        .map_err(|_| IntakeError::InvalidPartySize(people.to_string()))?;

    let start = parse_date_time("start", start.as_ref())?;
    let end = parse_date_time("end", end.as_ref())?;

    Ok(ReservationRequest::new(
        customer.as_ref(),
        party_size,
        contact.as_ref(),
        submitted_at,
        start,
        end,
    ))
}

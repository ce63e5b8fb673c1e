use thiserror::Error;

use crate::registry::RegistryError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    #[error("end time should be after the start time")]
    EndNotAfterStart,

    #[error("reservation start time should be after the current time of reservation")]
    StartBeforeSubmission,

    #[error("reservation time should be within the restaurant's opening hours")]
    OutsideOperatingHours,

    #[error("number of people must be at least 1")]
    InvalidPartySize(i64),

    #[error("no table available for the given number of people")]
    CapacityUnavailable { party_size: i64 },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

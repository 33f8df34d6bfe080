use std::num::ParseIntError;

use thiserror::Error;

use crate::constants::MISSING_CREDENTIALS_MESSAGE;

/// The credential chain resolved nothing at all
#[derive(Debug, Clone, Copy, Error)]
#[error("{}", MISSING_CREDENTIALS_MESSAGE)]
pub struct MissingCredentials;

/// Rejection from an integer range validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("{0}")]
    ParseInt(#[from] ParseIntError),
    #[error("{value} is not in the range [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

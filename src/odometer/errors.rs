use thiserror::Error;

/// Errors that can occur while constructing an odometer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OdometerError {
    #[error("Invalid bounds: minimum={minimum} must be less than maximum={maximum}")]
    InvalidBounds { minimum: i64, maximum: i64 },
    #[error("Digit {index} is out of range: {value} not in [{minimum}, {maximum})")]
    OutOfRange {
        index: usize,
        value: i64,
        minimum: i64,
        maximum: i64,
    },
    #[error("Digit sequence cannot be empty")]
    EmptyDigits,
    #[error("Expected one bounds pair per digit: {digits} digits, {bounds} bounds")]
    BoundsLengthMismatch { digits: usize, bounds: usize },
}

/// Terminal signal returned once the most-significant digit cannot advance.
///
/// This is not a failure; it marks the end of the sequence and is returned
/// by every call after the first one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Odometer is exhausted")]
pub struct Exhausted;

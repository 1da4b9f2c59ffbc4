//! Odometer - a bounded multi-digit counter
//!
//! This library enumerates combinations of integer digits, each kept within
//! `[minimum, maximum)`, by incrementing the rightmost digit and carrying
//! leftward on overflow, the way a mechanical odometer does.

pub mod odometer;
pub mod utils;

// Re-export the main public API
pub use odometer::{Bounds, Exhausted, Odometer, OdometerError};
pub use utils::UtilsError;

/// Enumerate every combination of `length` digits in `[minimum, maximum)`
///
/// Starts from the all-`minimum` state and normalizes carried digits, so
/// the returned odometer yields `(maximum - minimum)^length - 1` values.
///
/// # Errors
///
/// This function will return an error if:
/// * `minimum >= maximum`
/// * `length` is zero
///
/// # Examples
///
/// ```
/// use odometer::enumerate;
///
/// let combinations: Vec<Vec<i64>> = match enumerate(2, 0, 2) {
///     Ok(odometer) => odometer.collect(),
///     Err(e) => panic!("{}", e),
/// };
/// assert_eq!(combinations, vec![vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
pub fn enumerate(length: usize, minimum: i64, maximum: i64) -> Result<Odometer, OdometerError> {
    Odometer::with_length(length, minimum, maximum, true)
}

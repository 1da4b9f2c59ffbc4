use log::warn;

use super::errors::OdometerError;

/// Half-open range `[minimum, maximum)` a digit must stay within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    minimum: i64,
    maximum: i64,
}

impl Bounds {
    /// # Errors
    ///
    /// Returns `InvalidBounds` if `minimum >= maximum`.
    pub fn new(minimum: i64, maximum: i64) -> Result<Self, OdometerError> {
        if minimum >= maximum {
            warn!(
                "Rejecting bounds: minimum={} is not below maximum={}",
                minimum, maximum
            );
            return Err(OdometerError::InvalidBounds { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    pub fn maximum(&self) -> i64 {
        self.maximum
    }

    pub fn contains(&self, value: i64) -> bool {
        self.minimum <= value && value < self.maximum
    }

    /// Number of distinct values a digit can take
    pub fn span(&self) -> u128 {
        // maximum > minimum, so the difference is positive and fits in i128
        (i128::from(self.maximum) - i128::from(self.minimum)) as u128
    }

    /// # Errors
    ///
    /// Returns `OutOfRange` if `value` lies outside these bounds.
    pub fn check(&self, index: usize, value: i64) -> Result<(), OdometerError> {
        if self.contains(value) {
            return Ok(());
        }
        warn!(
            "Digit {} with value {} is outside [{}, {})",
            index, value, self.minimum, self.maximum
        );
        Err(OdometerError::OutOfRange {
            index,
            value,
            minimum: self.minimum,
            maximum: self.maximum,
        })
    }
}

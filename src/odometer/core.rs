use log::{debug, info, trace};
use std::iter::FusedIterator;

use crate::utils::combination_count;

use super::bounds::Bounds;
use super::errors::{Exhausted, OdometerError};
use super::state::Cursor;

/// Bounded multi-digit counter that enumerates digit combinations with carry.
///
/// Index 0 is the most-significant digit and the last index is the
/// least-significant one. Every call to [`Odometer::next_combination`] tries
/// the least-significant digit first and ripples carries to the left.
#[derive(Debug, Clone)]
pub struct Odometer {
    digits: Vec<i64>,
    bounds: Vec<Bounds>,
    cursor: Cursor,
    reset: bool,
}

impl Odometer {
    /// Create an odometer whose digits all share `[minimum, maximum)`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * `minimum >= maximum` (`InvalidBounds`)
    /// * `digits` is empty (`EmptyDigits`)
    /// * any initial digit lies outside `[minimum, maximum)` (`OutOfRange`)
    pub fn new(
        digits: Vec<i64>,
        minimum: i64,
        maximum: i64,
        reset: bool,
    ) -> Result<Self, OdometerError> {
        let bounds = Bounds::new(minimum, maximum)?;
        let per_digit = vec![bounds; digits.len()];
        Self::with_digit_bounds(digits, per_digit, reset)
    }

    /// Create an odometer of `length` digits, all starting at `minimum`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBounds` for `minimum >= maximum` and `EmptyDigits`
    /// for a zero length.
    pub fn with_length(
        length: usize,
        minimum: i64,
        maximum: i64,
        reset: bool,
    ) -> Result<Self, OdometerError> {
        Self::new(vec![minimum; length], minimum, maximum, reset)
    }

    /// Create an odometer where every digit carries its own bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty, if the number of bounds
    /// differs from the number of digits, or if a digit lies outside its
    /// bounds.
    pub fn with_digit_bounds(
        digits: Vec<i64>,
        bounds: Vec<Bounds>,
        reset: bool,
    ) -> Result<Self, OdometerError> {
        if digits.is_empty() {
            return Err(OdometerError::EmptyDigits);
        }
        if digits.len() != bounds.len() {
            return Err(OdometerError::BoundsLengthMismatch {
                digits: digits.len(),
                bounds: bounds.len(),
            });
        }
        for (index, (value, digit_bounds)) in digits.iter().zip(&bounds).enumerate() {
            digit_bounds.check(index, *value)?;
        }

        info!(
            "Initialized odometer with {} digits (reset={})",
            digits.len(),
            reset
        );

        let cursor = Cursor::rightmost(digits.len());
        Ok(Self {
            digits,
            bounds,
            cursor,
            reset,
        })
    }

    /// Advance to the next combination.
    ///
    /// Returns a read-only view of the digits after the advance, or
    /// [`Exhausted`] once the most-significant digit would overflow. After
    /// that every further call returns [`Exhausted`] without touching state.
    pub fn next_combination(&mut self) -> Result<&[i64], Exhausted> {
        loop {
            let Some(index) = self.cursor.index() else {
                return Err(Exhausted);
            };
            let (Some(digit), Some(bounds)) =
                (self.digits.get_mut(index), self.bounds.get(index).copied())
            else {
                self.cursor.mark_exhausted();
                return Err(Exhausted);
            };

            let candidate = digit.saturating_add(1);
            if candidate < bounds.maximum() {
                *digit = candidate;
                self.cursor = Cursor::rightmost(self.digits.len());
                return Ok(self.digits.as_slice());
            }

            if index == 0 {
                debug!("Most-significant digit overflowed at {}", candidate);
                self.cursor.mark_exhausted();
                return Err(Exhausted);
            }

            // Leaky counters keep the overflowed value on the carried digit
            *digit = if self.reset {
                bounds.minimum()
            } else {
                candidate
            };
            trace!("Carry from digit {} into digit {}", index, index - 1);
            self.cursor.carry();
        }
    }

    pub fn digits(&self) -> &[i64] {
        &self.digits
    }

    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    pub fn reset(&self) -> bool {
        self.reset
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Cursor position, `-1` once exhausted
    pub fn cursor(&self) -> isize {
        self.cursor.as_signed()
    }

    /// Exact number of values still to be produced.
    ///
    /// Only known for normalizing counters (`reset = true`); returns `None`
    /// for leaky counters or when the count does not fit in a `u128`.
    pub fn remaining(&self) -> Option<u128> {
        if self.cursor.is_exhausted() {
            return Some(0);
        }
        if !self.reset {
            return None;
        }

        let total = combination_count(&self.bounds)?;

        // Mixed-radix rank of the current digits, least-significant weight 1
        let mut rank: u128 = 0;
        let mut weight: u128 = 1;
        for (value, bounds) in self.digits.iter().zip(&self.bounds).rev() {
            let offset = u128::try_from(i128::from(*value) - i128::from(bounds.minimum())).ok()?;
            rank = rank.checked_add(offset.checked_mul(weight)?)?;
            weight = weight.saturating_mul(bounds.span());
        }

        total.checked_sub(rank)?.checked_sub(1)
    }
}

impl Iterator for Odometer {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_combination().ok().map(<[i64]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(count)) => (count, Some(count)),
            _ => (0, None),
        }
    }
}

impl FusedIterator for Odometer {}

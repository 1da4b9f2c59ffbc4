use log::debug;

use crate::odometer::Bounds;

/// Number of distinct combinations of digits drawn from `bounds`.
///
/// Returns `None` if the count does not fit in a `u128`.
pub fn combination_count(bounds: &[Bounds]) -> Option<u128> {
    let count = bounds
        .iter()
        .try_fold(1u128, |acc, b| acc.checked_mul(b.span()));
    debug!("Combination count for {} digits: {:?}", bounds.len(), count);
    count
}

use log::trace;

use crate::utils::constants::FORMAT_PLACEHOLDER;
use crate::utils::errors::UtilsError;

/// Render each digit as the single-byte character with that code point
///
/// # Errors
///
/// Returns an error if a digit lies outside `0..=255`.
pub fn digits_to_chars(digits: &[i64]) -> Result<String, UtilsError> {
    digits
        .iter()
        .map(|&digit| {
            u8::try_from(digit)
                .map(char::from)
                .map_err(|_| UtilsError::CharOutOfRange(digit))
        })
        .collect()
}

/// Render digits as a space separated list of numbers
pub fn digits_to_numbers(digits: &[i64]) -> String {
    digits
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Substitute the rendered snapshot for every placeholder in `template`
pub fn apply_format(template: &str, fuzzed: &str) -> String {
    let line = template.replace(FORMAT_PLACEHOLDER, fuzzed);
    trace!("Formatted '{}' as '{}'", fuzzed, line);
    line
}

pub fn contains_prohibited(line: &str, prohibited: &[char]) -> bool {
    line.chars().any(|c| prohibited.contains(&c))
}

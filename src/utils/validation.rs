use log::{debug, warn};

use crate::utils::constants::{CHAR_LIMIT, FORMAT_PLACEHOLDER};
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if digits drawn from `[minimum, maximum)` cannot all be
/// rendered as single-byte characters.
pub fn validate_char_bounds(minimum: i64, maximum: i64) -> Result<(), UtilsError> {
    debug!("Validating character bounds [{}, {})", minimum, maximum);

    if minimum < 0 || maximum > CHAR_LIMIT {
        warn!(
            "Bounds [{}, {}) fall outside the character range",
            minimum, maximum
        );
        return Err(UtilsError::TooHighForChar { minimum, maximum });
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the template has no `{fuzzed_string}` placeholder.
pub fn validate_format(template: &str) -> Result<(), UtilsError> {
    debug!("Validating output format: '{}'", template);

    if !template.contains(FORMAT_PLACEHOLDER) {
        warn!("Output format has no placeholder: '{}'", template);
        return Err(UtilsError::MissingPlaceholder(template.to_string()));
    }

    Ok(())
}

/// # Errors
///
/// Returns an error for a zero length.
pub fn validate_length(length: usize) -> Result<(), UtilsError> {
    if length == 0 {
        warn!("Digit count is zero");
        return Err(UtilsError::ZeroLength);
    }
    Ok(())
}

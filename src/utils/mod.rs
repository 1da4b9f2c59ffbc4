//! Helpers for driving an odometer from a host: validation, counting and rendering

mod constants;
mod counting;
mod errors;
mod render;
mod validation;

pub use constants::FORMAT_PLACEHOLDER;
pub use counting::combination_count;
pub use errors::UtilsError;
pub use render::{apply_format, contains_prohibited, digits_to_chars, digits_to_numbers};
pub use validation::{validate_char_bounds, validate_format, validate_length};

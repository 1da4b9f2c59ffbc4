use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Bounds [{minimum}, {maximum}) are too large for characters, must be within [0, 256)")]
    TooHighForChar { minimum: i64, maximum: i64 },
    #[error("Digit {0} has no character representation")]
    CharOutOfRange(i64),
    #[error("Output format must contain the {{fuzzed_string}} placeholder: {0}")]
    MissingPlaceholder(String),
    #[error("Length must be at least 1")]
    ZeroLength,
}

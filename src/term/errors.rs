/// Errors from terminal width detection.
use thiserror::Error;

/// Reasons a `COLUMNS` override is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnsOverrideError {
    /// Not a plain base-10 integer, or not in its canonical spelling
    /// (leading zeros, sign, surrounding whitespace).
    #[error("'{value}' is not a canonical column count")]
    NotCanonical {
        /// The rejected text.
        value: String,
    },

    /// Parsed, but outside `1..MAX_COLUMNS`.
    #[error("column count {columns} is out of range")]
    OutOfRange {
        /// The parsed value.
        columns: usize,
    },
}

/// Terminal width resolution.
///
/// Resolution order (first hit wins):
///
/// 1. **`COLUMNS` override**: accepted only in canonical base-10 form and
///    within `1..MAX_COLUMNS`.
/// 2. **Windows**: fixed default, the console is not queried.
/// 3. **Terminal query**: when the stream is a TTY and reports a positive
///    column count.
/// 4. **Default**: 80 columns.
///
/// Resolution never fails; every rejected source falls through to the next.
use tracing::debug;

use super::{
    COLUMNS_ENV, DEFAULT_WIDTH, MAX_COLUMNS,
    errors::ColumnsOverrideError,
    platform::{Platform, Stream},
};

/// Validate a `COLUMNS` value.
///
/// # Errors
///
/// - `ColumnsOverrideError::NotCanonical`: `value` does not round-trip
///   through integer formatting (`"007"`, `"+10"`, `" 10"`, `"0x50"`, `"-1"`).
/// - `ColumnsOverrideError::OutOfRange`: zero, or `MAX_COLUMNS` and above.
pub fn parse_columns_override(value: &str) -> Result<usize, ColumnsOverrideError> {
    let not_canonical = || ColumnsOverrideError::NotCanonical {
        value: value.to_owned(),
    };
    let columns: usize = value.parse().map_err(|_| not_canonical())?;
    if columns.to_string() != value {
        return Err(not_canonical());
    }
    if columns == 0 || columns >= MAX_COLUMNS {
        return Err(ColumnsOverrideError::OutOfRange { columns });
    }
    Ok(columns)
}

/// Resolve the column count for `stream`.
#[must_use]
pub fn terminal_width<P: Platform + ?Sized>(platform: &P, stream: Stream) -> usize {
    if let Some(value) = platform.var(COLUMNS_ENV) {
        match parse_columns_override(&value) {
            Ok(columns) => {
                debug!(columns, source = "env", "resolved terminal width");
                return columns;
            }
            Err(err) => debug!(%err, "ignoring {COLUMNS_ENV}"),
        }
    }

    if platform.is_windows() {
        debug!(columns = DEFAULT_WIDTH, source = "windows", "resolved terminal width");
        return DEFAULT_WIDTH;
    }

    if platform.is_terminal(stream) {
        match platform.query_columns(stream) {
            Some(columns) if columns > 0 => {
                debug!(columns, ?stream, source = "tty", "resolved terminal width");
                return columns;
            }
            _ => debug!(?stream, "terminal did not report a usable width"),
        }
    }

    debug!(columns = DEFAULT_WIDTH, source = "default", "resolved terminal width");
    DEFAULT_WIDTH
}

/// Terminal width detection.
pub mod errors;
pub mod platform;
pub mod width;

pub use errors::ColumnsOverrideError;
pub use platform::{Platform, Stream, SystemPlatform};
pub use width::{parse_columns_override, terminal_width};

/// Environment variable that overrides the detected width.
pub const COLUMNS_ENV: &str = "COLUMNS";

/// Width used when nothing better is known.
pub const DEFAULT_WIDTH: usize = 80;

/// Exclusive upper bound for an accepted `COLUMNS` value.
pub const MAX_COLUMNS: usize = 16384;

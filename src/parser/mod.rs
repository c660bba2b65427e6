/// The help-formatting wrapper around an argument engine.
pub mod handle;
pub mod outcome;

use std::ffi::OsStr;
use std::path::Path;

pub use handle::{CommandFactory, ParserHandle, create_parser};
pub use outcome::{
    EXIT_FAILURE, EXIT_SUCCESS, HELP_PREFIX, MISSING_COMMAND_MESSAGE, ParseFailure, classify,
};

/// Program name for usage lines: the file stem of `argv0`, or `fallback`.
#[must_use]
pub fn program_name(argv0: Option<&OsStr>, fallback: &str) -> String {
    argv0
        .and_then(|a| Path::new(a).file_stem())
        .and_then(OsStr::to_str)
        .filter(|s| !s.is_empty())
        .map_or_else(|| fallback.to_owned(), str::to_owned)
}

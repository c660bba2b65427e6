/// Interpretation of an engine's raw parse result.
use thiserror::Error;

use crate::engine::RawParse;
use crate::term::Stream;

/// Prefix that marks a message as help text rather than an error.
pub const HELP_PREFIX: &str = "Usage: ";

/// Exit code for success and for displayed help.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for parse errors and a missing subcommand.
pub const EXIT_FAILURE: i32 = 1;

/// Message printed when a subcommand is required but none ran.
pub const MISSING_COMMAND_MESSAGE: &str = "Error: Please supply a subcommand";

/// A parse that ended without arguments to hand back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The user asked for help. Not an error, but parsing stops.
    #[error("{0}")]
    HelpRequested(String),

    /// Malformed, missing or invalid arguments.
    #[error("{0}")]
    Invalid(String),
}

impl ParseFailure {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::HelpRequested(_) => EXIT_SUCCESS,
            Self::Invalid(_) => EXIT_FAILURE,
        }
    }

    /// Stream this outcome is reported on.
    #[must_use]
    pub fn stream(&self) -> Stream {
        match self {
            Self::HelpRequested(_) => Stream::Stdout,
            Self::Invalid(_) => Stream::Stderr,
        }
    }

    /// The help or error text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::HelpRequested(text) | Self::Invalid(text) => text,
        }
    }
}

/// Translate the engine's two-value result into a typed outcome.
///
/// A message with no parsed value is help when it starts with [`HELP_PREFIX`]
/// and an error otherwise. Everything else is success, possibly with nothing
/// parsed (a subcommand consumed the invocation).
///
/// # Errors
///
/// Returns `ParseFailure` when the engine stopped with a message.
pub fn classify<T>(raw: RawParse<T>) -> Result<Option<T>, ParseFailure> {
    match raw {
        RawParse {
            parsed: None,
            message: Some(text),
        } => {
            if text.starts_with(HELP_PREFIX) {
                Err(ParseFailure::HelpRequested(text))
            } else {
                Err(ParseFailure::Invalid(text))
            }
        }
        RawParse { parsed, .. } => Ok(parsed),
    }
}

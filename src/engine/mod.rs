/// The argument-parsing engine seam and its clap binding.
pub mod clap_engine;
pub mod printer;

use std::ffi::OsString;

use crate::banner;
use crate::layout::ColumnWidths;

pub use clap_engine::{ClapEngine, CommandAction};

/// What an engine's parse produced, before interpretation.
///
/// A single message channel carries both help text and error text. Help text
/// always starts with [`crate::parser::HELP_PREFIX`]; anything else is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParse<T> {
    /// Parsed arguments. Absent when there is a message, or when a
    /// subcommand action consumed the parse.
    pub parsed: Option<T>,
    /// Help or error text.
    pub message: Option<String>,
}

impl<T> RawParse<T> {
    /// A parse that produced arguments.
    #[must_use]
    pub fn parsed(value: T) -> Self {
        Self {
            parsed: Some(value),
            message: None,
        }
    }

    /// A parse that stopped with help or error text.
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            parsed: None,
            message: Some(text.into()),
        }
    }

    /// A parse that produced neither (a subcommand handled everything).
    #[must_use]
    pub fn consumed() -> Self {
        Self {
            parsed: None,
            message: None,
        }
    }
}

/// An argument-parsing engine that can be decorated by [`crate::ParserHandle`].
///
/// The engine owns option definitions, tokenizes argv and renders its own
/// usage and option help. The handle only sets names and column widths,
/// calls [`Engine::parse`] and decides what to print from the [`RawParse`].
///
/// Engines are cloned from a template for every parser, so `Clone` must
/// produce an independent instance.
pub trait Engine: Clone {
    /// The parsed-arguments mapping returned on success.
    type Parsed;

    /// Set the key and description column widths used when rendering help.
    fn set_colsz(&mut self, widths: ColumnWidths);

    /// Current column widths.
    fn colsz(&self) -> ColumnWidths;

    /// Set the display name used in usage lines.
    fn set_name(&mut self, name: &str);

    /// Display name used in usage lines.
    fn name(&self) -> &str;

    /// Set the one-paragraph description of the program or command.
    fn set_description(&mut self, text: &str);

    /// Parse `argv` (including the program name as the first element).
    fn parse(&mut self, argv: Vec<OsString>) -> RawParse<Self::Parsed>;

    /// The `Usage: <name> ...` line the engine derives from its options.
    fn generate_usage(&self) -> String;

    /// Detailed per-option help.
    fn generate_help(&self) -> String;

    /// Whether at least one subcommand is registered.
    fn has_commands(&self) -> bool;

    /// A fresh, unattached engine for a subcommand called `name`.
    ///
    /// Its display name is this engine's name followed by `name`.
    fn subcommand(&self, name: &str, description: &str) -> Self;

    /// Attach a configured subcommand engine.
    fn add_command(&mut self, command: Self);

    /// Usage banner followed by the detailed option help.
    fn help_and_usage(&self) -> String {
        banner::help_and_usage(
            self.name(),
            self.has_commands(),
            &self.generate_usage(),
            &self.generate_help(),
        )
    }
}

/// `ParserHandle`: an engine decorated with width-aware help and exit handling.
use std::ffi::OsString;
use std::io::{self, Write};
use std::process;

use tracing::debug;

use super::outcome::{
    EXIT_FAILURE, EXIT_SUCCESS, MISSING_COMMAND_MESSAGE, ParseFailure, classify,
};
use crate::engine::Engine;
use crate::layout::ColumnWidths;
use crate::term::{Platform, Stream, SystemPlatform, terminal_width};

/// Builds a subcommand handle from its parent.
pub type CommandFactory<E, P = SystemPlatform> =
    Box<dyn FnOnce(&ParserHandle<E, P>) -> ParserHandle<E, P>>;

/// A configured engine instance with help formatting and exit conventions.
///
/// The engine is private: parsing only happens through
/// [`ParserHandle::parse_command_line`] and friends, so column widths are
/// always set and help/error output always goes to the right stream.
#[derive(Debug, Clone)]
pub struct ParserHandle<E, P = SystemPlatform> {
    engine: E,
    platform: P,
}

/// Build a top-level parser on the real process environment.
///
/// `template` is cloned, never modified. Each factory in `commands` is called
/// with the partially built parent and its result is registered as a
/// subcommand.
pub fn create_parser<E: Engine>(
    template: &E,
    name: &str,
    description: &str,
    commands: Vec<CommandFactory<E>>,
) -> ParserHandle<E> {
    ParserHandle::with_platform(template, name, description, commands, SystemPlatform)
}

impl<E: Engine, P: Platform + Clone> ParserHandle<E, P> {
    /// Like [`create_parser`], with an explicit platform.
    pub fn with_platform(
        template: &E,
        name: &str,
        description: &str,
        commands: Vec<CommandFactory<E, P>>,
        platform: P,
    ) -> Self {
        let mut engine = template.clone();
        engine.set_name(name);
        engine.set_description(description);
        let mut handle = Self { engine, platform };

        for factory in commands {
            let mut sub = factory(&handle);
            sub.apply_widths(Stream::Stdout);
            debug!(command = sub.name(), "registered subcommand");
            handle.engine.add_command(sub.engine);
        }
        handle
    }

    /// A fresh subcommand handle named `<this name> <name>`.
    ///
    /// Meant to be called from a [`CommandFactory`].
    #[must_use]
    pub fn command(&self, name: &str, description: &str) -> Self {
        Self {
            engine: self.engine.subcommand(name, description),
            platform: self.platform.clone(),
        }
    }

    /// Reconfigure the engine (add options, actions).
    #[must_use]
    pub fn map_engine(self, f: impl FnOnce(E) -> E) -> Self {
        Self {
            engine: f(self.engine),
            platform: self.platform,
        }
    }

    /// Display name, including any parent prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        self.engine.name()
    }

    /// Column widths currently applied to the engine.
    #[must_use]
    pub fn widths(&self) -> ColumnWidths {
        self.engine.colsz()
    }

    /// Resolve the terminal width of `stream` and apply the column split.
    pub fn apply_widths(&mut self, stream: Stream) -> ColumnWidths {
        let widths = ColumnWidths::for_terminal(terminal_width(&self.platform, stream));
        self.engine.set_colsz(widths);
        widths
    }

    /// Usage banner and option help, rendered with the current widths.
    #[must_use]
    pub fn help_and_usage(&self) -> String {
        self.engine.help_and_usage()
    }

    /// Parse `argv` without printing or exiting.
    ///
    /// # Errors
    ///
    /// Returns `ParseFailure::HelpRequested` or `ParseFailure::Invalid` when
    /// the engine stopped with a message.
    pub fn try_parse_from<I, T>(&mut self, argv: I) -> Result<Option<E::Parsed>, ParseFailure>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.apply_widths(Stream::Stdout);
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        classify(self.engine.parse(argv))
    }

    /// Print a failed parse and return the exit code to use.
    ///
    /// Help goes to `out` as is. Errors go to `err`, followed by the help
    /// block rendered for the error stream's width.
    pub fn report(
        &mut self,
        failure: &ParseFailure,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> i32 {
        self.apply_widths(failure.stream());
        match failure {
            ParseFailure::HelpRequested(text) => {
                let _ = out.write_all(text.as_bytes());
                if !text.ends_with('\n') {
                    let _ = writeln!(out);
                }
                let _ = out.flush();
            }
            ParseFailure::Invalid(text) => {
                let _ = writeln!(err, "{text}");
                let _ = err.write_all(self.help_and_usage().as_bytes());
                let _ = err.flush();
            }
        }
        failure.exit_code()
    }

    /// Print the missing-subcommand error and return the exit code to use.
    pub fn report_missing_command(&mut self, err: &mut impl Write) -> i32 {
        self.apply_widths(Stream::Stderr);
        let _ = writeln!(err, "{MISSING_COMMAND_MESSAGE}");
        let _ = err.write_all(self.help_and_usage().as_bytes());
        let _ = err.flush();
        EXIT_FAILURE
    }

    /// Parse `argv`, printing help or errors to the given writers.
    ///
    /// # Errors
    ///
    /// Returns the exit code the process should end with when the parse
    /// stopped with help or an error.
    pub fn resolve_from<I, T>(
        &mut self,
        argv: I,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<Option<E::Parsed>, i32>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.try_parse_from(argv)
            .map_err(|failure| self.report(&failure, out, err))
    }

    /// The exit code for a program that requires a subcommand.
    ///
    /// Nothing returned means a subcommand handled the invocation (exit 0).
    /// Arguments returned means none did, which is reported as a missing
    /// subcommand.
    pub fn expect_command_from<I, T>(
        &mut self,
        argv: I,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        match self.resolve_from(argv, out, err) {
            Err(code) => code,
            Ok(None) => EXIT_SUCCESS,
            Ok(Some(_)) => self.report_missing_command(err),
        }
    }

    /// Parse the process arguments.
    ///
    /// Returns the parsed arguments (or nothing, when a subcommand handled the
    /// invocation). On help, prints to stdout and exits 0; on error, prints to
    /// stderr and exits 1.
    pub fn parse_command_line(&mut self) -> Option<E::Parsed> {
        self.parse_command_line_from(std::env::args_os())
    }

    /// [`ParserHandle::parse_command_line`] with explicit arguments.
    pub fn parse_command_line_from<I, T>(&mut self, argv: I) -> Option<E::Parsed>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        match self.try_parse_from(argv) {
            Ok(parsed) => parsed,
            Err(failure) => {
                let code =
                    self.report(&failure, &mut io::stdout().lock(), &mut io::stderr().lock());
                exit(code)
            }
        }
    }

    /// Parse the process arguments for a program that requires a subcommand,
    /// then exit: 0 when a subcommand ran or help was shown, 1 otherwise.
    pub fn parse_command_line_expecting_command_and_exit(&mut self) -> ! {
        self.parse_command_line_expecting_command_from_and_exit(std::env::args_os())
    }

    /// [`ParserHandle::parse_command_line_expecting_command_and_exit`] with
    /// explicit arguments.
    pub fn parse_command_line_expecting_command_from_and_exit<I, T>(&mut self, argv: I) -> !
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let code = match self.parse_command_line_from(argv) {
            None => EXIT_SUCCESS,
            Some(_) => self.report_missing_command(&mut io::stderr().lock()),
        };
        exit(code)
    }
}

/// `process::exit` skips destructors, so buffered stdout is flushed first.
fn exit(code: i32) -> ! {
    let _ = io::stdout().flush();
    process::exit(code)
}

//! termhelp: terminal-width-aware help, usage banners and exit-code
//! conventions for command-line programs, layered over clap.
//!
//! ```no_run
//! use clap::{Arg, ArgAction, Command};
//! use termhelp::{ClapEngine, CommandFactory, ParserHandle, create_parser};
//!
//! let template = ClapEngine::new(Command::new("prog"))
//!     .arg(Arg::new("verbose").short('v').long("verbose").action(ArgAction::SetTrue));
//! let build: CommandFactory<ClapEngine> = Box::new(|parent: &ParserHandle<ClapEngine>| {
//!     parent
//!         .command("build", "Build the project")
//!         .map_engine(|e| e.action(|_| Ok(())))
//! });
//! let mut parser = create_parser(&template, "prog", "Example program", vec![build]);
//! parser.parse_command_line_expecting_command_and_exit();
//! ```

pub mod banner;
pub mod engine;
pub mod layout;
pub mod parser;
pub mod term;

pub use engine::{ClapEngine, CommandAction, Engine, RawParse};
pub use layout::ColumnWidths;
pub use parser::{
    CommandFactory, EXIT_FAILURE, EXIT_SUCCESS, ParseFailure, ParserHandle, create_parser,
    program_name,
};
pub use term::{Platform, Stream, SystemPlatform, terminal_width};

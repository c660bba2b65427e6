/// CLI argument definitions via the clap builder API.
use clap::{Arg, ArgAction, Command};
use termhelp::ClapEngine;

/// One-line description shown in help output.
pub const DESCRIPTION: &str = "Show how termhelp lays out help, usage and errors for the current terminal";

/// Fallback program name when argv[0] is unusable.
pub const DEFAULT_NAME: &str = "termhelp";

/// Id of the global verbosity flag.
pub const VERBOSE_ID: &str = "verbose";

/// Engine template for the top-level program.
#[must_use]
pub fn template() -> ClapEngine {
    ClapEngine::new(Command::new(DEFAULT_NAME)).arg(
        Arg::new(VERBOSE_ID)
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Log debug output to stderr"),
    )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of human-readable text")
}

/// Options for `termhelp columns`.
#[must_use]
pub fn columns(engine: ClapEngine) -> ClapEngine {
    engine.arg(json_flag())
}

/// Options for `termhelp echo`.
#[must_use]
pub fn echo(engine: ClapEngine) -> ClapEngine {
    engine
        .arg(json_flag())
        .arg(
            Arg::new("upper")
                .short('u')
                .long("upper")
                .action(ArgAction::SetTrue)
                .help("Convert the words to upper case before printing them"),
        )
        .arg(
            Arg::new("words")
                .value_name("WORDS")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Words to print, separated by single spaces"),
        )
}

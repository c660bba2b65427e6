/// Subcommand registration: one factory per command, in registration order.
pub mod columns;
pub mod echo;

use termhelp::{ClapEngine, CommandFactory, ParserHandle};

use crate::cli::args;

/// Factories for every subcommand of the demo program.
#[must_use]
pub fn factories() -> Vec<CommandFactory<ClapEngine>> {
    vec![
        Box::new(|parent: &ParserHandle<ClapEngine>| {
            parent
                .command("columns", "Show the terminal width and column split for stdout and stderr")
                .map_engine(|e| args::columns(e).action(columns::run))
        }) as CommandFactory<ClapEngine>,
        Box::new(|parent: &ParserHandle<ClapEngine>| {
            parent
                .command("echo", "Print the given words, or the parsed arguments as JSON")
                .map_engine(|e| args::echo(e).action(echo::run))
        }),
    ]
}

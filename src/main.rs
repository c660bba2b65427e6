#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! termhelp: demo program for terminal-width-aware help and exit conventions.

mod cli;
mod commands;
mod types;

use cli::args::{DEFAULT_NAME, DESCRIPTION};

fn main() {
    cli::init_tracing(cli::verbose_requested(std::env::args_os()));

    let name = termhelp::program_name(std::env::args_os().next().as_deref(), DEFAULT_NAME);
    let template = cli::args::template();
    let mut parser = termhelp::create_parser(&template, &name, DESCRIPTION, commands::factories());
    parser.parse_command_line_expecting_command_and_exit();
}

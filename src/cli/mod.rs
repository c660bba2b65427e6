/// CLI layer: argument definitions, output formatting and logging setup.
pub mod args;
pub mod output;

pub use output::{write_echo, write_widths};

use std::ffi::OsStr;

/// Install the tracing subscriber. Logs go to stderr at `warn`, or `debug`
/// with `verbose`, unless `RUST_LOG` says otherwise.
pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let env_filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Whether `-v`/`--verbose` appears in `argv` before any `--`.
///
/// Logging is set up before the parser runs, so this looks at the raw
/// arguments. Short flag clusters such as `-uv` count.
#[must_use]
pub fn verbose_requested<I, T>(argv: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    argv.into_iter()
        .skip(1)
        .map(|arg| arg.as_ref().to_string_lossy().into_owned())
        .take_while(|arg| arg != "--")
        .any(|arg| {
            arg == "--verbose"
                || arg
                    .strip_prefix('-')
                    .is_some_and(|short| !short.starts_with('-') && short.contains('v'))
        })
}

/// `columns` command: report width resolution for both output streams.
use anyhow::Context;
use clap::ArgMatches;
use termhelp::{ColumnWidths, Platform, Stream, SystemPlatform, terminal_width};

use crate::cli::write_widths;
use crate::types::WidthReport;

/// Run `termhelp columns`.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let platform = SystemPlatform;
    let reports: Vec<WidthReport> = [(Stream::Stdout, "stdout"), (Stream::Stderr, "stderr")]
        .into_iter()
        .map(|(stream, label)| report(&platform, stream, label))
        .collect();
    write_widths(&reports, matches.get_flag("json")).context("writing width report")
}

fn report(platform: &impl Platform, stream: Stream, label: &'static str) -> WidthReport {
    let columns = terminal_width(platform, stream);
    let widths = ColumnWidths::for_terminal(columns);
    WidthReport {
        stream: label,
        tty: platform.is_terminal(stream),
        columns,
        key_width: widths.key,
        description_width: widths.description,
    }
}

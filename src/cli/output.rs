/// Output formatting: JSON or table.
use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use crate::types::{EchoOutput, WidthReport};

/// Write width reports to stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn write_widths(reports: &[WidthReport], json: bool) -> serde_json::Result<()> {
    if json {
        return print_json(reports);
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["STREAM", "TTY", "COLUMNS", "KEY", "DESCRIPTION"]);
    for r in reports {
        table.add_row([
            r.stream.to_string(),
            if r.tty { "yes" } else { "no" }.to_string(),
            r.columns.to_string(),
            r.key_width.to_string(),
            r.description_width.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Write the echo result to stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn write_echo(output: &EchoOutput, json: bool) -> serde_json::Result<()> {
    if json {
        return print_json(output);
    }
    println!("{}", output.text);
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

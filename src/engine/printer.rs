/// Usage and option-help rendering for a `clap::Command`.
///
/// Help is laid out in two columns:
///
/// ```text
///   -o, --output <FILE> Write the result to FILE instead of
///                       standard output
/// ```
///
/// The key column is padded to `ColumnWidths::key`; descriptions wrap at
/// `ColumnWidths::description`. A key wider than its column gets its
/// description on the following lines.
use clap::{Arg, ArgAction, Command};

use crate::banner::LINE_ENDING;
use crate::layout::ColumnWidths;

/// Id of the help flag installed on every command.
pub const HELP_ARG_ID: &str = "help";

const INDENT: &str = "  ";

/// Render `Usage: <name> [OPTIONS] <ARG>...` for `cmd`.
#[must_use]
pub fn generate_usage(cmd: &Command, name: &str) -> String {
    let mut usage = format!("Usage: {name}");
    if cmd.get_arguments().any(|a| is_listed_option(a) && a.get_id().as_str() != HELP_ARG_ID) {
        usage.push_str(" [OPTIONS]");
    }
    for arg in cmd.get_positionals().filter(|a| !a.is_hide_set()) {
        usage.push(' ');
        usage.push_str(&positional_key(arg));
    }
    usage
}

/// Render the `Arguments:`, `Options:` and `Commands:` sections of `cmd`.
#[must_use]
pub fn generate_help(cmd: &Command, about: Option<&str>, widths: ColumnWidths) -> String {
    let mut sections: Vec<String> = Vec::new();

    if let Some(about) = about.map(str::trim).filter(|s| !s.is_empty()) {
        sections.push(wrap_text(about, widths.key + 1 + widths.description).join(LINE_ENDING));
    }

    let positionals: Vec<(String, String)> = cmd
        .get_positionals()
        .filter(|a| !a.is_hide_set())
        .map(|a| (positional_key(a), arg_description(a)))
        .collect();
    if !positionals.is_empty() {
        sections.push(section("Arguments:", &positionals, widths));
    }

    let options: Vec<(String, String)> = cmd
        .get_arguments()
        .filter(|a| is_listed_option(a))
        .map(|a| (option_key(a), arg_description(a)))
        .collect();
    if !options.is_empty() {
        sections.push(section("Options:", &options, widths));
    }

    let mut commands: Vec<(String, String)> = cmd
        .get_subcommands()
        .filter(|c| !c.is_hide_set())
        .map(|c| {
            let about = c.get_about().map(ToString::to_string).unwrap_or_default();
            (c.get_name().to_owned(), about)
        })
        .collect();
    commands.sort_by(|a, b| a.0.cmp(&b.0));
    if !commands.is_empty() {
        sections.push(section("Commands:", &commands, widths));
    }

    sections.join(&format!("{LINE_ENDING}{LINE_ENDING}"))
}

fn is_listed_option(arg: &Arg) -> bool {
    !arg.is_positional() && !arg.is_hide_set()
}

fn section(title: &str, rows: &[(String, String)], widths: ColumnWidths) -> String {
    let mut lines = vec![title.to_owned()];
    for (key, description) in rows {
        lines.extend(render_row(key, description, widths));
    }
    lines.join(LINE_ENDING)
}

/// Lay out one key/description pair.
#[must_use]
pub fn render_row(key: &str, description: &str, widths: ColumnWidths) -> Vec<String> {
    let wrapped = wrap_text(description, widths.description);
    let hanging = format!("{INDENT}{:width$} ", "", width = widths.key);

    let mut lines = Vec::with_capacity(wrapped.len() + 1);
    let mut rest = wrapped.iter();
    if key.chars().count() <= widths.key {
        match rest.next() {
            Some(first) => lines.push(format!("{INDENT}{key:<width$} {first}", width = widths.key)),
            None => lines.push(format!("{INDENT}{key}")),
        }
    } else {
        lines.push(format!("{INDENT}{key}"));
    }
    for line in rest {
        lines.push(format!("{hanging}{line}"));
    }
    lines.into_iter().map(|l| l.trim_end().to_owned()).collect()
}

/// Greedy word wrap at `max_width` characters.
///
/// Blank-line-separated paragraphs and explicit newlines are kept. A single
/// word longer than `max_width` gets a line of its own rather than being cut.
/// Empty input gives no lines.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    for source_line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;
        for word in source_line.split_whitespace() {
            let word_width = word.chars().count();
            if !current.is_empty() && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        lines.push(current);
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

fn value_name(arg: &Arg) -> String {
    arg.get_value_names()
        .and_then(|names| names.first())
        .map_or_else(|| arg.get_id().as_str().to_uppercase(), ToString::to_string)
}

fn takes_multiple(arg: &Arg) -> bool {
    matches!(arg.get_action(), ArgAction::Append)
        || arg.get_num_args().is_some_and(|r| r.max_values() > 1)
}

fn positional_key(arg: &Arg) -> String {
    let name = value_name(arg);
    let dots = if takes_multiple(arg) { "..." } else { "" };
    if arg.is_required_set() {
        format!("<{name}>{dots}")
    } else {
        format!("[{name}]{dots}")
    }
}

fn option_key(arg: &Arg) -> String {
    let mut key = match (arg.get_short(), arg.get_long()) {
        (Some(s), Some(l)) => format!("-{s}, --{l}"),
        (Some(s), None) => format!("-{s}"),
        (None, Some(l)) => format!("    --{l}"),
        (None, None) => arg.get_id().as_str().to_owned(),
    };
    if arg.get_action().takes_values() {
        key.push_str(&format!(" <{}>", value_name(arg)));
    }
    key
}

fn arg_description(arg: &Arg) -> String {
    let mut text = arg.get_help().map(ToString::to_string).unwrap_or_default();
    let defaults: Vec<String> = arg
        .get_default_values()
        .iter()
        .map(|v| v.to_string_lossy().into_owned())
        .collect();
    if !defaults.is_empty() && arg.get_action().takes_values() {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&format!("[default: {}]", defaults.join(",")));
    }
    text
}

#[cfg(test)]
mod tests {
    use clap::{Arg, ArgAction, Command};

    use super::*;

    fn widths(key: usize, description: usize) -> ColumnWidths {
        ColumnWidths { key, description }
    }

    fn sample() -> Command {
        Command::new("prog")
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Log more"),
            )
            .arg(
                Arg::new("output")
                    .long("out")
                    .value_name("FILE")
                    .default_value("-")
                    .help("Where to write"),
            )
            .arg(
                Arg::new("inputs")
                    .value_name("INPUT")
                    .required(true)
                    .action(ArgAction::Append)
                    .help("Files to read"),
            )
    }

    #[test]
    fn test_wrap_basic() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_wrap_long_word_kept_whole() {
        assert_eq!(wrap_text("a verylongword b", 4), vec!["a", "verylongword", "b"]);
    }

    #[test]
    fn test_wrap_keeps_paragraphs() {
        assert_eq!(wrap_text("first\n\nsecond", 20), vec!["first", "", "second"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_row_fits() {
        let lines = render_row("-v", "be loud about it", widths(6, 8));
        assert_eq!(lines, vec!["  -v     be loud", "         about it"]);
    }

    #[test]
    fn test_row_key_too_wide() {
        let lines = render_row("--very-long-flag", "text", widths(6, 20));
        assert_eq!(lines, vec!["  --very-long-flag", "         text"]);
    }

    #[test]
    fn test_row_without_description() {
        assert_eq!(render_row("-q", "", widths(6, 20)), vec!["  -q"]);
    }

    #[test]
    fn test_usage_line() {
        assert_eq!(
            generate_usage(&sample(), "prog"),
            "Usage: prog [OPTIONS] <INPUT>..."
        );
    }

    #[test]
    fn test_usage_line_without_options() {
        let cmd = Command::new("bare").arg(Arg::new("name").required(false));
        assert_eq!(generate_usage(&cmd, "prog bare"), "Usage: prog bare [NAME]");
    }

    #[test]
    fn test_help_sections() {
        let help = generate_help(&sample(), None, widths(18, 54));
        let lines: Vec<&str> = help.lines().collect();
        assert_eq!(lines[0], "Arguments:");
        assert_eq!(lines[1], format!("  {:<18} Files to read", "<INPUT>..."));
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Options:");
        assert_eq!(lines[4], format!("  {:<18} Log more", "-v, --verbose"));
        assert_eq!(
            lines[5],
            format!("  {:<18} Where to write [default: -]", "    --out <FILE>")
        );
    }

    #[test]
    fn test_commands_sorted() {
        let cmd = Command::new("prog")
            .subcommand(Command::new("zeta").about("last"))
            .subcommand(Command::new("alpha").about("first"));
        let help = generate_help(&cmd, None, widths(10, 30));
        let lines: Vec<&str> = help.lines().collect();
        assert_eq!(lines[0], "Commands:");
        assert!(lines[1].starts_with("  alpha"));
        assert!(lines[2].starts_with("  zeta"));
    }

    #[test]
    fn test_narrow_widths_wrap_more() {
        let wide = generate_help(&sample(), None, widths(18, 74));
        let narrow = generate_help(&sample(), None, widths(5, 10));
        assert!(narrow.lines().count() > wide.lines().count());
    }
}

/// Usage banner: the one-line-per-invocation-form summary above option help.
use std::fmt::Write as _;

/// Line separator used when assembling help text.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Usage lines for `name`.
///
/// `engine_usage` is the engine's own `Usage: <name> ...` line and always comes
/// first. Programs with subcommands get the `COMMAND` forms as well:
///
/// ```text
/// Usage: prog [OPTIONS]
/// Usage: prog COMMAND
/// Usage: prog -h|--help
/// Usage: prog COMMAND -h|--help
/// ```
#[must_use]
pub fn usage_lines(name: &str, has_commands: bool, engine_usage: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);
    lines.push(engine_usage.trim_end().to_owned());
    if has_commands {
        lines.push(format!("Usage: {name} COMMAND"));
    }
    lines.push(format!("Usage: {name} -h|--help"));
    if has_commands {
        lines.push(format!("Usage: {name} COMMAND -h|--help"));
    }
    lines
}

/// Full help block: usage lines, a blank line, then the option help.
#[must_use]
pub fn help_and_usage(
    name: &str,
    has_commands: bool,
    engine_usage: &str,
    engine_help: &str,
) -> String {
    let mut out = usage_lines(name, has_commands, engine_usage).join(LINE_ENDING);
    out.push_str(LINE_ENDING);
    let help = engine_help.trim_end();
    if !help.is_empty() {
        let _ = write!(out, "{LINE_ENDING}{help}{LINE_ENDING}");
    }
    out
}

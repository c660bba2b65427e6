/// `Engine` implementation backed by the clap builder API.
use std::{ffi::OsString, fmt, rc::Rc};

use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command, error::ErrorKind};
use tracing::debug;

use super::{Engine, RawParse, printer};
use crate::layout::ColumnWidths;

/// Callback run when its subcommand is selected. Returning `Ok` means the
/// subcommand handled the invocation.
pub type CommandAction = Rc<dyn Fn(&ArgMatches) -> anyhow::Result<()>>;

/// A clap `Command` decorated with a display name, column widths and
/// per-subcommand engines.
///
/// clap's own help and version handling is switched off. Every command gets
/// a `-h/--help` flag whose output is replaced, at parse time, by the text
/// [`printer`] renders for the current column widths.
#[derive(Clone)]
pub struct ClapEngine {
    command: Command,
    name: String,
    about: Option<String>,
    widths: ColumnWidths,
    action: Option<CommandAction>,
    commands: Vec<ClapEngine>,
}

impl fmt::Debug for ClapEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClapEngine")
            .field("name", &self.name)
            .field("widths", &self.widths)
            .field("has_action", &self.action.is_some())
            .field("commands", &self.commands)
            .finish_non_exhaustive()
    }
}

impl ClapEngine {
    /// Wrap `command`. Its name becomes the initial display name.
    #[must_use]
    pub fn new(command: Command) -> Self {
        let name = command.get_name().to_owned();
        let about = command.get_about().map(ToString::to_string);
        Self {
            command: prepare(command),
            name,
            about,
            widths: ColumnWidths::default(),
            action: None,
            commands: Vec::new(),
        }
    }

    /// Add an argument definition.
    #[must_use]
    pub fn arg(mut self, arg: Arg) -> Self {
        self.command = self.command.arg(arg);
        self
    }

    /// Run `action` when this engine is selected as a subcommand.
    #[must_use]
    pub fn action(mut self, action: impl Fn(&ArgMatches) -> anyhow::Result<()> + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    fn find_command(&self, name: &str) -> Option<&ClapEngine> {
        self.commands.iter().find(|c| c.command.get_name() == name)
    }

    /// The full command tree as clap needs it for matching, each level
    /// carrying its own help block.
    fn assembled(&self) -> Command {
        let command = self.command.clone().override_help(self.help_and_usage());
        self.commands
            .iter()
            .fold(command, |cmd, sub| cmd.subcommand(sub.assembled()))
    }

    fn interpret(&self, matches: ArgMatches) -> RawParse<ArgMatches> {
        let Some((name, sub_matches)) = matches.subcommand() else {
            return RawParse::parsed(matches);
        };
        let Some(sub) = self.find_command(name) else {
            return RawParse::parsed(matches);
        };
        if sub.has_commands() {
            // Nested hierarchy: the child decides, but the caller still gets
            // the top-level matches when nothing consumed the parse.
            let inner = sub.interpret(sub_matches.clone());
            return match inner {
                RawParse { parsed: Some(_), .. } => RawParse::parsed(matches),
                other => other,
            };
        }
        match &sub.action {
            Some(action) => {
                debug!(command = %sub.name, "dispatching subcommand");
                match action(sub_matches) {
                    Ok(()) => RawParse::consumed(),
                    Err(err) => RawParse::message(format!("Error: {err:#}")),
                }
            }
            None => RawParse::parsed(matches),
        }
    }
}

impl Engine for ClapEngine {
    type Parsed = ArgMatches;

    fn set_colsz(&mut self, widths: ColumnWidths) {
        self.widths = widths;
        for sub in &mut self.commands {
            sub.set_colsz(widths);
        }
    }

    fn colsz(&self) -> ColumnWidths {
        self.widths
    }

    fn set_name(&mut self, name: &str) {
        name.clone_into(&mut self.name);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_description(&mut self, text: &str) {
        self.about = Some(text.to_owned());
        self.command = self.command.clone().about(text.to_owned());
    }

    fn parse(&mut self, argv: Vec<OsString>) -> RawParse<ArgMatches> {
        match self.assembled().try_get_matches_from(argv) {
            Ok(matches) => self.interpret(matches),
            Err(err) => match err.kind() {
                // Rendered from the override installed by `assembled`.
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    RawParse::message(err.to_string())
                }
                _ => RawParse::message(first_paragraph(&err.to_string())),
            },
        }
    }

    fn generate_usage(&self) -> String {
        printer::generate_usage(&self.command, &self.name)
    }

    fn generate_help(&self) -> String {
        let help_cmd = self
            .commands
            .iter()
            .fold(self.command.clone(), |cmd, sub| cmd.subcommand(sub.command.clone()));
        printer::generate_help(&help_cmd, self.about.as_deref(), self.widths)
    }

    fn has_commands(&self) -> bool {
        !self.commands.is_empty()
    }

    fn subcommand(&self, name: &str, description: &str) -> Self {
        let mut sub = Self::new(Command::new(name.to_owned()));
        sub.set_name(&format!("{} {name}", self.name));
        sub.set_description(description);
        sub
    }

    fn add_command(&mut self, command: Self) {
        self.commands.push(command);
    }
}

fn prepare(command: Command) -> Command {
    command
        .color(ColorChoice::Never)
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(printer::HELP_ARG_ID)
                .short('h')
                .long("help")
                .action(ArgAction::Help)
                .help("Show this help message and exit"),
        )
}

/// clap renders errors as `error: ...`, a tip, its own usage and a footer.
/// Only the first paragraph is kept; the wrapper prints its own usage.
fn first_paragraph(rendered: &str) -> String {
    let normalized = rendered.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .next()
        .unwrap_or_default()
        .trim_end()
        .to_owned()
}

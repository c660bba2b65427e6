/// Serializable output types for the demo commands.
use std::collections::BTreeMap;

use serde::Serialize;

/// Width resolution for one output stream.
#[derive(Debug, Clone, Serialize)]
pub struct WidthReport {
    /// `stdout` or `stderr`.
    pub stream: &'static str,
    /// Whether the stream is a terminal.
    pub tty: bool,
    /// Resolved terminal width.
    pub columns: usize,
    /// Option-key column width.
    pub key_width: usize,
    /// Description column width.
    pub description_width: usize,
}

/// Parsed arguments of `echo`, keyed by argument id.
#[derive(Debug, Clone, Serialize)]
pub struct EchoOutput {
    /// The words as printed.
    pub text: String,
    /// Raw values of every argument clap recorded.
    pub args: BTreeMap<String, Vec<String>>,
}

/// `echo` command: print words back, or the parsed argument mapping.
use std::collections::BTreeMap;

use anyhow::Context;
use clap::ArgMatches;

use crate::cli::write_echo;
use crate::types::EchoOutput;

/// Run `termhelp echo`.
///
/// # Errors
///
/// Returns an error if clap did not record the required words.
pub fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let words: Vec<&str> = matches
        .get_many::<String>("words")
        .context("no words given")?
        .map(String::as_str)
        .collect();
    let mut text = words.join(" ");
    if matches.get_flag("upper") {
        text = text.to_uppercase();
    }

    let output = EchoOutput {
        text,
        args: raw_args(matches),
    };
    write_echo(&output, matches.get_flag("json")).context("writing echo output")
}

/// Every argument clap recorded, as lossy UTF-8 strings.
fn raw_args(matches: &ArgMatches) -> BTreeMap<String, Vec<String>> {
    matches
        .ids()
        .filter_map(|id| {
            let values = matches.get_raw(id.as_str())?;
            Some((
                id.as_str().to_owned(),
                values.map(|v| v.to_string_lossy().into_owned()).collect(),
            ))
        })
        .collect()
}

use std::process::{Command, Output};

fn termhelp(args: &[&str], columns: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_termhelp"));
    cmd.args(args).env_remove("RUST_LOG");
    match columns {
        Some(value) => cmd.env("COLUMNS", value),
        None => cmd.env_remove("COLUMNS"),
    };
    cmd.output().expect("failed to run termhelp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_goes_to_stdout() {
    let output = termhelp(&["--help"], Some("100"));
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).is_empty());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().take(4).collect();
    assert_eq!(
        lines,
        vec![
            "Usage: termhelp [OPTIONS]",
            "Usage: termhelp COMMAND",
            "Usage: termhelp -h|--help",
            "Usage: termhelp COMMAND -h|--help",
        ]
    );
    assert!(out.contains("Commands:"));
    assert!(out.contains("columns"));
    assert!(out.contains("echo"));
}

#[test]
fn test_missing_subcommand() {
    let output = termhelp(&[], Some("100"));
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    let mut lines = err.lines();
    assert_eq!(lines.next(), Some("Error: Please supply a subcommand"));
    assert_eq!(lines.next(), Some("Usage: termhelp [OPTIONS]"));
    assert_eq!(lines.next(), Some("Usage: termhelp COMMAND"));
}

#[test]
fn test_unknown_flag_is_error() {
    let output = termhelp(&["--bogus"], Some("100"));
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.starts_with("error: unexpected argument '--bogus'"), "{err}");
    assert!(err.contains("Usage: termhelp COMMAND -h|--help"));
}

#[test]
fn test_unknown_subcommand_is_error() {
    let output = termhelp(&["frobnicate"], Some("100"));
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error:"));
}

#[test]
fn test_subcommand_runs() {
    let output = termhelp(&["echo", "hello", "world"], None);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "hello world\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_subcommand_flags() {
    let output = termhelp(&["echo", "--upper", "quiet", "please"], None);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "QUIET PLEASE\n");
}

#[test]
fn test_subcommand_json() {
    let output = termhelp(&["echo", "--json", "a", "b"], None);
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["text"], "a b");
    assert_eq!(value["args"]["words"], serde_json::json!(["a", "b"]));
}

#[test]
fn test_subcommand_help_banner() {
    let output = termhelp(&["echo", "-h"], Some("100"));
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().take(2).collect();
    assert_eq!(
        lines,
        vec![
            "Usage: termhelp echo [OPTIONS] <WORDS>...",
            "Usage: termhelp echo -h|--help",
        ]
    );
    assert!(!out.contains("COMMAND"));
}

#[test]
fn test_subcommand_help_after_arguments() {
    let output = termhelp(&["echo", "a", "-h"], Some("100"));
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).is_empty());
    let out = stdout(&output);
    assert_eq!(
        out.lines().next(),
        Some("Usage: termhelp echo [OPTIONS] <WORDS>...")
    );
    // The action must not run.
    assert!(!out.lines().any(|l| l == "a"));
}

#[test]
fn test_help_before_subcommand() {
    let output = termhelp(&["-h", "echo"], Some("100"));
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).is_empty());
    let out = stdout(&output);
    assert_eq!(out.lines().next(), Some("Usage: termhelp [OPTIONS]"));
    assert!(out.contains("Usage: termhelp COMMAND -h|--help"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let output = termhelp(&["-v", "echo", "hi"], Some("100"));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "hi\n");
    assert!(stderr(&output).contains("DEBUG"), "{}", stderr(&output));
}

#[test]
fn test_verbose_after_subcommand() {
    let output = termhelp(&["echo", "--verbose", "hi"], None);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "hi\n");
}

#[test]
fn test_subcommand_missing_argument() {
    let output = termhelp(&["echo"], None);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error:"), "{err}");
    assert!(err.contains("Usage: termhelp COMMAND"));
}

#[test]
fn test_columns_override() {
    let output = termhelp(&["columns", "--json"], Some("100"));
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    for report in value.as_array().unwrap() {
        assert_eq!(report["columns"], 100);
        assert_eq!(report["key_width"], 18);
        assert_eq!(report["description_width"], 74);
    }
}

#[test]
fn test_columns_rejected_override_uses_default() {
    // Output is piped, so no terminal can be queried.
    let output = termhelp(&["columns", "--json"], Some("007"));
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    for report in value.as_array().unwrap() {
        assert_eq!(report["tty"], false);
        assert_eq!(report["columns"], 80);
        assert_eq!(report["key_width"], 18);
        assert_eq!(report["description_width"], 54);
    }
}

#[test]
fn test_help_wraps_to_narrow_columns() {
    let wide = stdout(&termhelp(&["echo", "-h"], Some("200")));
    let narrow = stdout(&termhelp(&["echo", "-h"], Some("40")));
    assert!(narrow.lines().count() > wide.lines().count());
    for line in narrow.lines().filter(|l| l.starts_with("  ")) {
        // Keys may overflow their column, but descriptions stay inside 40.
        if !line.trim_start().starts_with('-') && !line.trim_start().starts_with('<') {
            assert!(line.chars().count() <= 40, "{line:?}");
        }
    }
}

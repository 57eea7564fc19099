//! CLI Interface Tests
//!
//! These tests run the `tokc` binary against fixture files and check the
//! report it writes, its stderr, and its exit code.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the tokc binary
fn tokc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tokc"))
}

/// A command isolated from any `tokc.toml` or log settings of the caller.
fn tokc(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(tokc_bin());
    cmd.current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TOKC_CONFIG")
        .env_remove("TOKC_VERBOSE")
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join("xdg"));
    cmd
}

/// Runs tokc on `input` and returns the written report.
fn run_report(input: &str, extra_args: &[&str]) -> String {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");
    fs::write(&input_path, input).expect("Failed to write input");

    tokc(&temp_dir)
        .args(extra_args)
        .arg(&input_path)
        .arg(&output_path)
        .assert()
        .success();

    fs::read_to_string(&output_path).expect("Failed to read report")
}

#[test]
fn test_cli_simple_statement() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("simple.out");

    tokc(&temp_dir)
        .arg(fixtures_dir().join("simple.txt"))
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        report,
        "Statement #1\n\
         Lexeme 1 is 12 and is an INT_LITERAL\n\
         Lexeme 2 is + and is an ADD_OP\n\
         Lexeme 3 is 3 and is an INT_LITERAL\n\
         Lexeme 4 is ; and is a SEMI_COLON\n"
    );
}

#[test]
fn test_cli_two_statements() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("two.out");

    tokc(&temp_dir)
        .arg(fixtures_dir().join("two_statements.txt"))
        .arg(&output_path)
        .assert()
        .success();

    let report = fs::read_to_string(&output_path).unwrap();
    assert!(report.contains("Statement #1\n"));
    assert!(report.contains(&format!("{}\nStatement #2\n", "-".repeat(57))));
    assert_eq!(report.matches("Statement #").count(), 2);
    assert_eq!(report.matches("Lexeme 1 is").count(), 2);
}

#[test]
fn test_cli_mixed_matches_expected_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("mixed.out");

    tokc(&temp_dir)
        .arg(fixtures_dir().join("mixed.txt"))
        .arg(&output_path)
        .assert()
        .success();

    let expected = fs::read_to_string(fixtures_dir().join("mixed.expected")).unwrap();
    let actual = fs::read_to_string(&output_path).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_cli_no_arguments_prints_usage() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    tokc(&temp_dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: tokc inputFile outputFile"));
}

#[test]
fn test_cli_one_argument_prints_usage() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    tokc(&temp_dir)
        .arg(fixtures_dir().join("simple.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_usage_checked_before_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("tokc.toml"), "[scan]\nline_capacity = 0\n").unwrap();

    tokc(&temp_dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: tokc inputFile outputFile"))
        .stderr(predicate::str::contains("Configuration error").not());
}

#[test]
fn test_cli_unknown_flag_exits_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    tokc(&temp_dir)
        .arg("--bogus")
        .arg(fixtures_dir().join("simple.txt"))
        .arg(temp_dir.path().join("out.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_cli_hyphen_input_after_separator() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("-in.txt"), "1;\n").unwrap();

    tokc(&temp_dir)
        .arg("--")
        .arg("-in.txt")
        .arg("out.txt")
        .assert()
        .success();

    let report = fs::read_to_string(temp_dir.path().join("out.txt")).unwrap();
    assert!(report.starts_with("Statement #1\n"));
}

#[test]
fn test_cli_missing_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.txt");
    let output_path = temp_dir.path().join("out.txt");

    tokc(&temp_dir)
        .arg(&missing)
        .arg(&output_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "ERROR: could not open {} for reading",
            missing.display()
        )));

    assert!(!output_path.exists());
}

#[test]
fn test_cli_unwritable_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("no_such_dir").join("out.txt");

    tokc(&temp_dir)
        .arg(fixtures_dir().join("simple.txt"))
        .arg(&output_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "ERROR: could not open {} for writing",
            output_path.display()
        )));
}

#[test]
fn test_cli_extra_paths_ignored() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.txt");

    tokc(&temp_dir)
        .arg(fixtures_dir().join("simple.txt"))
        .arg(&output_path)
        .arg("ignored.txt")
        .assert()
        .success();

    assert!(output_path.exists());
}

#[test]
fn test_cli_lexical_errors_do_not_fail() {
    let report = run_report("x;\n", &[]);
    assert_eq!(
        report,
        "Statement #1\n\
         ===> 'x'\n\
         Lexical error: not a lexeme\n\
         Lexeme 2 is ; and is a SEMI_COLON\n"
    );
}

#[test]
fn test_cli_empty_input_writes_empty_report() {
    assert!(run_report("", &[]).is_empty());
}

#[test]
fn test_cli_json_format() {
    let report = run_report("<=x\n", &["--format", "json"]);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"lexeme\":\"<=\""));
    assert!(lines[0].contains("\"category\":\"LESS_THAN_OR_EQUAL_OP\""));
    assert!(lines[1].contains("\"category\":\"ERROR\""));
}

#[test]
fn test_cli_line_capacity_truncates() {
    let report = run_report("1+2;3;\n", &["--line-capacity", "4"]);
    assert_eq!(report.matches("Statement #").count(), 1);
    assert!(!report.contains("Lexeme 1 is 3"));
}

#[test]
fn test_cli_reject_overflow() {
    let digits = "8".repeat(30);
    let report = run_report(&format!("{};\n", digits), &["--reject-overflow"]);
    assert!(report.contains(&format!("===> '{}'", &digits[..19])));
}

#[test]
fn test_cli_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("custom.toml");
    let input_path = temp_dir.path().join("input.txt");
    let output_path = temp_dir.path().join("output.txt");
    fs::write(&config_path, "[report]\nseparator_width = 5\n").unwrap();
    fs::write(&input_path, "1;2;\n").unwrap();

    tokc(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg(&input_path)
        .arg(&output_path)
        .assert()
        .success();

    let report = fs::read_to_string(&output_path).unwrap();
    assert!(report.contains("-----\nStatement #2\n"));
}

#[test]
fn test_cli_missing_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    tokc(&temp_dir)
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg(fixtures_dir().join("simple.txt"))
        .arg(temp_dir.path().join("out.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    tokc(&temp_dir)
        .arg("--verbose")
        .arg("--no-color")
        .arg(fixtures_dir().join("simple.txt"))
        .arg(temp_dir.path().join("out.txt"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("scan complete"));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    tokc(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokc"));
}

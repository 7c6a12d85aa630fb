//! CLI integration tests.
//!
//! Tests for argument parsing and command handling.

use crate::mocks::mock_checker;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use uk_modcheck::cli::args::{Args, Command, OutputFormat};
use uk_modcheck::commands::{batch, lookup, validate};
use uk_modcheck::{CheckerConfig, ModCheckError, ModulusChecker};

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["uk-modcheck"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_default_options() {
    let args = parse(&["validate", "089999", "66374958"]);
    assert_eq!(args.format, OutputFormat::Text);
    assert!(!args.verbose);
    assert_eq!(args.weights, None);
    assert_eq!(args.substitutes, None);
}

#[test]
fn test_version_command() {
    assert_eq!(parse(&["version"]).command, Command::Version);
}

#[test]
fn test_batch_command() {
    let args = parse(&["batch", "-"]);
    assert_eq!(
        args.command,
        Command::Batch {
            file: PathBuf::from("-")
        }
    );
}

#[test]
fn test_json_format() {
    let args = parse(&["--format", "json", "lookup", "938696"]);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn test_invalid_format() {
    assert!(Args::try_parse_from(["uk-modcheck", "--format", "xml", "version"]).is_err());
}

#[test]
fn test_unknown_command() {
    assert!(Args::try_parse_from(["uk-modcheck", "check"]).is_err());
}

#[test]
fn test_table_options_build_config() {
    let args = parse(&[
        "validate",
        "089999",
        "66374958",
        "--weights",
        "/tmp/valacdos.txt",
        "--substitutes",
        "/tmp/scsubtab.txt",
    ]);
    let config = CheckerConfig::from_args(&args);
    assert_eq!(config.weight_table, Some(PathBuf::from("/tmp/valacdos.txt")));
    assert_eq!(config.substitution_table, Some(PathBuf::from("/tmp/scsubtab.txt")));
}

#[test]
fn test_validate_command() {
    let args = parse(&["--no-color", "validate", "x", "y"]);
    let checker = ModulusChecker::standard();

    let output = validate::run(&args, checker, "08-99-99", "66374958").unwrap();
    assert!(output.success);

    let output = validate::run(&args, checker, "089999", "66374959").unwrap();
    assert!(!output.success);

    assert!(matches!(
        validate::run(&args, checker, "089999", "6637495X"),
        Err(ModCheckError::InvalidInput { .. })
    ));
}

#[test]
fn test_batch_command_with_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# sort code, account number").unwrap();
    writeln!(file, "100000,12345670").unwrap();
    writeln!(file, "300000,12345600").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "400000 12345601").unwrap();

    let args = parse(&["--no-color", "batch", "x"]);
    let output = batch::run(&args, &mock_checker(), file.path()).unwrap();
    assert!(output.success);
    assert!(output
        .text
        .ends_with("SUMMARY: 3 valid, 0 invalid, 0 rejected (3 total)"));
}

#[test]
fn test_batch_command_reports_failures() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "100000,12345671").unwrap();
    writeln!(file, "10000A,12345670").unwrap();

    let args = parse(&["--no-color", "batch", "x"]);
    let output = batch::run(&args, &mock_checker(), file.path()).unwrap();
    assert!(!output.success);
    assert!(output.text.contains("line 2: REJECTED"));
    assert!(output
        .text
        .ends_with("SUMMARY: 0 valid, 1 invalid, 1 rejected (2 total)"));
}

#[test]
fn test_lookup_command() {
    let args = parse(&["--no-color", "lookup", "x"]);
    let output = lookup::run(&args, &mock_checker(), "700000").unwrap();
    assert!(output.success);
    assert!(output.text.contains("Substitute sort code: 700001"));
}

//! Output formatting tests.

use crate::mocks::mock_checker;
use uk_modcheck::cli::args::OutputFormat;
use uk_modcheck::cli::output::{get_formatter, OutputFormatter, TerminalFormatter};
use uk_modcheck::engine::result::BatchReport;
use uk_modcheck::{Evaluation, ValidationRequest};

fn evaluate(sort_code: &str, account_number: &str) -> Evaluation {
    let request = ValidationRequest::new(sort_code, account_number).unwrap();
    mock_checker().evaluate(&request)
}

#[test]
fn test_verbose_trace() {
    let formatter = TerminalFormatter::new(false, true);
    let output = formatter.format_evaluation(&evaluate("300000", "12345610"));

    assert!(output.starts_with("300000 12345610: INVALID (decided by the second check)"));
    assert!(output.contains("check 1: 300000-300000 MOD10"));
    assert!(output.contains("result:  PASS (total 0, remainder 0)"));
    assert!(output.contains("result:  FAIL (total 1, remainder 1)"));
    assert!(output.contains("weights: 0 0 0 0 0 0 0 0 0 0 0 0 1 0"));
}

#[test]
fn test_verbose_skip() {
    let formatter = TerminalFormatter::new(false, true);
    let output = formatter.format_evaluation(&evaluate("700000", "12645671"));
    assert!(output.contains("(exception 3)"));
    assert!(output.contains("result:  SKIP (exception 3: position c is 6 or 9)"));
}

#[test]
fn test_empty_batch() {
    let formatter = TerminalFormatter::new(false, false);
    assert_eq!(
        formatter.format_batch(&BatchReport::new()),
        "SUMMARY: 0 valid, 0 invalid, 0 rejected (0 total)"
    );
}

#[test]
fn test_batch_lines() {
    let mut report = BatchReport::new();
    report.add_evaluation(evaluate("100000", "12345670"));
    report.add_evaluation(evaluate("100000", "12345671"));
    report.add_rejected(3, "1000,1", "expected sort_code,account_number".to_string());

    let formatter = TerminalFormatter::new(false, false);
    let output = formatter.format_batch(&report);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "100000 12345670: VALID",
            "100000 12345671: INVALID",
            "line 3: REJECTED expected sort_code,account_number",
            "SUMMARY: 1 valid, 1 invalid, 1 rejected (3 total)",
        ]
    );
}

#[test]
fn test_lookup_without_substitute() {
    let formatter = TerminalFormatter::new(false, false);
    let lookup = mock_checker().lookup("100000").unwrap();
    let output = formatter.format_lookup(&lookup);
    assert!(output.starts_with("Sort code: 100000\n  check 1: 100000-100000 MOD10"));
    assert!(output.ends_with("Substitute sort code: none"));
}

#[test]
fn test_text_formatter_selected() {
    let formatter = get_formatter(OutputFormat::Text, true, false);
    assert_eq!(
        formatter.format_evaluation(&evaluate("100000", "12345670")),
        "100000 12345670: VALID"
    );
}

#[cfg(feature = "json")]
mod json {
    use super::*;

    #[test]
    fn test_json_batch() {
        let mut report = BatchReport::new();
        report.add_evaluation(evaluate("400000", "12345601"));
        report.add_rejected(2, "x", "bad".to_string());

        let formatter = get_formatter(OutputFormat::Json, true, false);
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format_batch(&report)).unwrap();

        assert_eq!(value["summary"]["valid"], 1);
        assert_eq!(value["summary"]["rejected"], 1);
        assert_eq!(value["evaluations"][0]["resolution"], "digit_correction");
        assert_eq!(value["evaluations"][0]["checks"][1]["account_number"], "01234560");
        assert_eq!(value["evaluations"][0]["checks"][1]["number"], "40000001234560");
        assert_eq!(value["rejected"][0]["line"], 2);
    }

    #[test]
    fn test_json_lookup() {
        let formatter = get_formatter(OutputFormat::Json, true, false);
        let lookup = mock_checker().lookup("700000").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format_lookup(&lookup)).unwrap();

        assert_eq!(value["substitute"], 700001);
        assert_eq!(value["records"][1]["exception"], 3);
        assert_eq!(value["records"][1]["modulus"], "MOD10");
    }
}

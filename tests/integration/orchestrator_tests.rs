//! Combination and retry rules on the mock tables.

use crate::mocks::mock_checker;
use std::sync::Arc;
use std::thread;
use uk_modcheck::{CheckResult, Evaluation, ModulusChecker, Resolution, ValidationRequest};

fn evaluate(checker: &ModulusChecker, sort_code: &str, account_number: &str) -> Evaluation {
    let request = ValidationRequest::new(sort_code, account_number).unwrap();
    checker.evaluate(&request)
}

fn assert_verdict(
    sort_code: &str,
    account_number: &str,
    valid: bool,
    resolution: Resolution,
    checks: usize,
) {
    let evaluation = evaluate(&mock_checker(), sort_code, account_number);
    assert_eq!(
        (evaluation.valid, evaluation.resolution, evaluation.checks.len()),
        (valid, resolution, checks),
        "{} {}",
        sort_code,
        account_number
    );
}

#[test]
fn test_single_check() {
    assert_verdict("100000", "12345670", true, Resolution::SingleCheck, 1);
    assert_verdict("100000", "12345671", false, Resolution::SingleCheck, 1);
}

#[test]
fn test_short_account_cannot_pass() {
    let evaluation = evaluate(&mock_checker(), "100000", "123450");
    assert!(!evaluation.valid);
    assert_eq!(
        evaluation.checks[0].result,
        CheckResult::Incomplete { digits: 12 }
    );
}

#[test]
fn test_either_check_suffices() {
    // First check passes: second is not run
    assert_verdict("200000", "12345670", true, Resolution::FirstCheckSufficient, 1);
    // First check fails: second decides
    assert_verdict("200000", "12345605", true, Resolution::SecondCheck, 2);
    assert_verdict("200000", "12345615", false, Resolution::SecondCheck, 2);
}

#[test]
fn test_both_checks_required() {
    assert_verdict("300000", "12345600", true, Resolution::SecondCheck, 2);
    assert_verdict("300000", "12345610", false, Resolution::SecondCheck, 2);
    assert_verdict("300000", "12345605", false, Resolution::FirstCheckFinal, 1);
}

#[test]
fn test_digit_correction() {
    assert_verdict("400000", "12345670", true, Resolution::SingleCheck, 1);
    // Eighth digit 1: retried as 01234560
    assert_verdict("400000", "12345601", true, Resolution::DigitCorrection, 2);
    // Retried as 01234568
    assert_verdict("400000", "12345681", false, Resolution::DigitCorrection, 2);
    // Eighth digit 5: no retry
    assert_verdict("400000", "12345675", false, Resolution::DigitCorrectionRejected, 1);
    // No eighth digit
    assert_verdict("400000", "1234560", false, Resolution::DigitCorrectionRejected, 1);
}

#[test]
fn test_digit_correction_trace() {
    let evaluation = evaluate(&mock_checker(), "400000", "12345601");
    let retry = &evaluation.checks[1];
    assert_eq!(retry.account_number, "01234560");
    assert_eq!(retry.number.as_str(), "40000001234560");
    assert!(retry.passed());
}

#[test]
fn test_nested_ranges() {
    // Only the outer range applies
    assert_verdict("512345", "12345671", true, Resolution::SingleCheck, 1);
    // Outer and inner range both apply, in table order
    assert_verdict("550000", "12345670", true, Resolution::SecondCheck, 2);
    assert_verdict("550000", "12345671", false, Resolution::SecondCheck, 2);

    let evaluation = evaluate(&mock_checker(), "550000", "12345671");
    assert_eq!(evaluation.checks[0].record.end, 599999);
    assert_eq!(evaluation.checks[1].record.end, 550000);
}

#[test]
fn test_exception_1_adjustment() {
    // 6 * 2 = 12 -> 1 + 2 = 3, plus 27 = 30
    assert_verdict("600000", "12345676", true, Resolution::SingleCheck, 1);
    // 0 + 27 = 27
    assert_verdict("600000", "12345670", false, Resolution::SingleCheck, 1);
}

#[test]
fn test_exception_3_skip() {
    // Third account digit 6: second check skipped
    let evaluation = evaluate(&mock_checker(), "700000", "12645671");
    assert!(evaluation.valid);
    assert!(matches!(evaluation.checks[1].result, CheckResult::Skip { .. }));
    assert_eq!(evaluation.checks[1].weights, None);

    assert_verdict("700000", "12345671", false, Resolution::SecondCheck, 2);
    assert_verdict("700000", "12345670", true, Resolution::SecondCheck, 2);
}

#[test]
fn test_unknown_sort_code() {
    assert_verdict("999999", "12345678", true, Resolution::NoApplicableRange, 0);
    assert_verdict("000001", "12345678", true, Resolution::NoApplicableRange, 0);
}

#[test]
fn test_malformed_input_runs_no_checks() {
    assert_verdict("10000", "12345670", false, Resolution::MalformedInput, 0);
    assert_verdict("100000", "12345", false, Resolution::MalformedInput, 0);
    assert_verdict("100000", "12345678901", false, Resolution::MalformedInput, 0);
}

#[test]
fn test_lookup() {
    let checker = mock_checker();

    let lookup = checker.lookup("70-00-00").unwrap();
    assert_eq!(lookup.sort_code, "700000");
    assert_eq!(lookup.records.len(), 2);
    assert_eq!(lookup.substitute, Some(700001));

    let lookup = checker.lookup("999999").unwrap();
    assert!(lookup.records.is_empty());
    assert_eq!(lookup.substitute, None);

    assert!(checker.lookup("7000").is_none());
    assert!(checker.lookup("70000X").is_none());
}

#[test]
fn test_evaluation_is_repeatable() {
    let checker = mock_checker();
    let first = evaluate(&checker, "400000", "12345601");
    let second = evaluate(&checker, "400000", "12345601");
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_use() {
    let checker = Arc::new(mock_checker());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let checker = Arc::clone(&checker);
            thread::spawn(move || {
                for _ in 0..100 {
                    let valid = i % 2 == 0;
                    let account = if valid { "12345670" } else { "12345671" };
                    assert_eq!(evaluate(&checker, "100000", account).valid, valid);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_standard_checker_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let checker = ModulusChecker::standard();
                evaluate(checker, "089999", "66374958").valid
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

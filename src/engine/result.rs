//! Evaluation results.
//!
//! Records what each check computed and why the final verdict was reached,
//! and aggregates verdicts for batch runs.

use crate::checks::checksum::Checksum;
use crate::checks::number::ComposedNumber;
use crate::data::{WeightRecord, WEIGHT_COUNT};
use serde::Serialize;
use std::fmt;

/// Result of a single modulus check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CheckResult {
    /// Remainder test passed
    Pass { checksum: Checksum },
    /// Remainder test failed
    Fail { checksum: Checksum },
    /// Check bypassed by an exception; counts as passed
    Skip { reason: &'static str },
    /// Fewer than 14 digits to weight; counts as failed
    Incomplete { digits: usize },
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass { checksum } => write!(
                f,
                "PASS (total {}, remainder {})",
                checksum.total, checksum.remainder
            ),
            CheckResult::Fail { checksum } => write!(
                f,
                "FAIL (total {}, remainder {})",
                checksum.total, checksum.remainder
            ),
            CheckResult::Skip { reason } => write!(f, "SKIP ({})", reason),
            CheckResult::Incomplete { digits } => {
                write!(f, "FAIL (only {} of {} digits present)", digits, WEIGHT_COUNT)
            }
        }
    }
}

/// One check as it was carried out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Weight record that defined the check
    pub record: WeightRecord,
    /// Account number used (differs from the request after the exception 14 correction)
    pub account_number: String,
    /// Sort code + account number as checksummed
    pub number: ComposedNumber,
    /// Effective weights, `None` when the check was skipped
    pub weights: Option<[i32; WEIGHT_COUNT]>,
    pub result: CheckResult,
}

impl CheckOutcome {
    /// Whether this check counts as passed
    pub fn passed(&self) -> bool {
        matches!(self.result, CheckResult::Pass { .. } | CheckResult::Skip { .. })
    }
}

/// How the final verdict was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Sort code or account number has the wrong length
    MalformedInput,
    /// No weight record covers the sort code; presumed valid
    NoApplicableRange,
    /// Only one check is defined and it decided
    SingleCheck,
    /// First check passed and its exception makes the second optional
    FirstCheckSufficient,
    /// The second check decided
    SecondCheck,
    /// First check failed and both checks were required
    FirstCheckFinal,
    /// Exception 14 retry with the eighth digit removed decided
    DigitCorrection,
    /// Exception 14 retry not allowed: eighth digit is not 0, 1 or 9
    DigitCorrectionRejected,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Resolution::MalformedInput => "sort code or account number has an invalid length",
            Resolution::NoApplicableRange => "no modulus check defined for this sort code",
            Resolution::SingleCheck => "decided by the only check",
            Resolution::FirstCheckSufficient => "first check passed, second check not required",
            Resolution::SecondCheck => "decided by the second check",
            Resolution::FirstCheckFinal => "first check failed",
            Resolution::DigitCorrection => "decided by the exception 14 digit correction",
            Resolution::DigitCorrectionRejected => {
                "exception 14: eighth digit is not 0, 1 or 9"
            }
        };
        f.write_str(text)
    }
}

/// Verdict for one request, with the checks that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub sort_code: String,
    pub account_number: String,
    pub valid: bool,
    pub resolution: Resolution,
    /// Checks in the order they ran
    pub checks: Vec<CheckOutcome>,
}

/// Reference data that applies to one sort code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortCodeLookup {
    pub sort_code: String,
    /// Applicable weight records in table order (at most two)
    pub records: Vec<WeightRecord>,
    /// Substitute used by exception 5, if listed
    pub substitute: Option<u32>,
}

/// Batch summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub valid: u32,
    pub invalid: u32,
    /// Lines rejected before evaluation (non-digit input)
    pub rejected: u32,
    pub total: u32,
}

/// A line of batch input that could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    pub line: usize,
    pub input: String,
    pub reason: String,
}

/// Result aggregator for batch validation
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub evaluations: Vec<Evaluation>,
    pub rejected: Vec<RejectedLine>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a completed evaluation
    pub fn add_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluations.push(evaluation);
    }

    /// Add an input line that failed normalization
    pub fn add_rejected(&mut self, line: usize, input: &str, reason: String) {
        self.rejected.push(RejectedLine {
            line,
            input: input.to_string(),
            reason,
        });
    }

    /// Whether every line was evaluated and valid
    pub fn all_valid(&self) -> bool {
        self.rejected.is_empty() && self.evaluations.iter().all(|e| e.valid)
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();

        for evaluation in &self.evaluations {
            summary.total += 1;
            if evaluation.valid {
                summary.valid += 1;
            } else {
                summary.invalid += 1;
            }
        }

        summary.rejected = self.rejected.len() as u32;
        summary.total += summary.rejected;
        summary
    }
}

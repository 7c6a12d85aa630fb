//! Check orchestration.
//!
//! Combines the one or two checks defined for a sort code into a verdict:
//!
//! ```text
//! Start -> RangeLookup -> EvaluateFirst -> Done
//!                                       -> EvaluateSecond -> Done
//!                                       -> RetryFirst     -> Done
//! ```
//!
//! - Wrong lengths are invalid; a sort code without checks is presumed valid.
//! - A passing first check is final when there is no second check or when its
//!   exception is one of 2, 9, 10, 11, 12, 13, 14; otherwise the second check
//!   decides.
//! - A failing first check with exception 14 is retried once with the eighth
//!   account digit removed and a leading zero, and that retry decides.
//! - A failing first check is otherwise final, unless its exception is one of
//!   2, 9, 10, 11, 12, 13 and a second check exists to decide instead.
//!
//! The checker holds only immutable tables, so one instance can be shared
//! across threads without locking.

use crate::checks::run_check;
use crate::data::{Exception, SubstitutionTable, WeightRecord, WeightTable};
use crate::engine::range::{self, ApplicableChecks};
use crate::engine::request::{ValidationRequest, SORT_CODE_LENGTH};
use crate::engine::result::{CheckOutcome, Evaluation, Resolution, SortCodeLookup};
use std::sync::OnceLock;

/// Index of the account digit examined by exception 14
const CORRECTION_DIGIT_INDEX: usize = 7;

/// Orchestrator states
#[derive(Debug, Clone, Copy)]
enum Stage<'a> {
    Start,
    RangeLookup,
    EvaluateFirst {
        first: &'a WeightRecord,
        second: Option<&'a WeightRecord>,
    },
    EvaluateSecond(&'a WeightRecord),
    RetryFirst(&'a WeightRecord),
    Done(bool, Resolution),
}

/// Sort code / account number validator
#[derive(Debug, Clone)]
pub struct ModulusChecker {
    weights: WeightTable,
    substitutes: SubstitutionTable,
}

impl ModulusChecker {
    /// Create a checker over already-loaded tables
    pub fn new(weights: WeightTable, substitutes: SubstitutionTable) -> Self {
        ModulusChecker {
            weights,
            substitutes,
        }
    }

    /// Checker over the embedded published tables, built once per process
    pub fn standard() -> &'static ModulusChecker {
        static STANDARD: OnceLock<ModulusChecker> = OnceLock::new();
        STANDARD.get_or_init(|| {
            ModulusChecker::new(
                WeightTable::standard().clone(),
                SubstitutionTable::standard().clone(),
            )
        })
    }

    pub fn weight_table(&self) -> &WeightTable {
        &self.weights
    }

    pub fn substitution_table(&self) -> &SubstitutionTable {
        &self.substitutes
    }

    /// Weight records that apply to a numeric sort code
    pub fn applicable_checks(&self, sort_code: u32) -> ApplicableChecks<'_> {
        range::resolve(&self.weights, sort_code)
    }

    /// Weight records and substitution for a sort code.
    ///
    /// Returns `None` when the sort code is not six digits.
    pub fn lookup(&self, sort_code: &str) -> Option<SortCodeLookup> {
        let request = ValidationRequest::new(sort_code, "").ok()?;
        if request.sort_code().len() != SORT_CODE_LENGTH {
            return None;
        }
        let code = request.sort_code_value()?;

        Some(SortCodeLookup {
            sort_code: request.sort_code().to_string(),
            records: self
                .applicable_checks(code)
                .to_vec()
                .into_iter()
                .cloned()
                .collect(),
            substitute: self.substitutes.substitute(code),
        })
    }

    /// Whether the sort code and account number pass the modulus check
    pub fn is_valid(&self, request: &ValidationRequest) -> bool {
        self.evaluate(request).valid
    }

    /// Run the checks for `request` and record how the verdict was reached
    pub fn evaluate(&self, request: &ValidationRequest) -> Evaluation {
        let mut checks: Vec<CheckOutcome> = Vec::with_capacity(2);
        let mut stage = Stage::Start;

        let (valid, resolution) = loop {
            stage = match stage {
                Stage::Start => {
                    if request.is_well_formed() {
                        Stage::RangeLookup
                    } else {
                        Stage::Done(false, Resolution::MalformedInput)
                    }
                }
                Stage::RangeLookup => {
                    let applicable = request
                        .sort_code_value()
                        .map(|code| self.applicable_checks(code))
                        .unwrap_or(ApplicableChecks::None);
                    match applicable {
                        ApplicableChecks::None => Stage::Done(true, Resolution::NoApplicableRange),
                        ApplicableChecks::Single(first) => Stage::EvaluateFirst {
                            first,
                            second: None,
                        },
                        ApplicableChecks::Pair(first, second) => Stage::EvaluateFirst {
                            first,
                            second: Some(second),
                        },
                    }
                }
                Stage::EvaluateFirst { first, second } => {
                    let outcome = self.check(first, request, request.account_number());
                    let passed = outcome.passed();
                    checks.push(outcome);

                    let either = first.exception.is_some_and(Exception::either_check_suffices);

                    match (passed, second) {
                        (true, None) => Stage::Done(true, Resolution::SingleCheck),
                        (true, Some(_)) if either => {
                            Stage::Done(true, Resolution::FirstCheckSufficient)
                        }
                        (true, Some(second)) => Stage::EvaluateSecond(second),
                        (false, _) if first.exception == Some(Exception::E14) => {
                            Stage::RetryFirst(first)
                        }
                        (false, None) => Stage::Done(false, Resolution::SingleCheck),
                        (false, Some(second)) if either => Stage::EvaluateSecond(second),
                        (false, Some(_)) => Stage::Done(false, Resolution::FirstCheckFinal),
                    }
                }
                Stage::EvaluateSecond(second) => {
                    let outcome = self.check(second, request, request.account_number());
                    let passed = outcome.passed();
                    checks.push(outcome);
                    Stage::Done(passed, Resolution::SecondCheck)
                }
                Stage::RetryFirst(first) => match corrected_account_number(request.account_number()) {
                    Some(corrected) => {
                        let outcome = self.check(first, request, &corrected);
                        let passed = outcome.passed();
                        checks.push(outcome);
                        Stage::Done(passed, Resolution::DigitCorrection)
                    }
                    None => Stage::Done(false, Resolution::DigitCorrectionRejected),
                },
                Stage::Done(valid, resolution) => break (valid, resolution),
            };
        };

        log::debug!(
            "{} {}: {} ({})",
            request.sort_code(),
            request.account_number(),
            if valid { "valid" } else { "invalid" },
            resolution
        );

        Evaluation {
            sort_code: request.sort_code().to_string(),
            account_number: request.account_number().to_string(),
            valid,
            resolution,
            checks,
        }
    }

    fn check(
        &self,
        record: &WeightRecord,
        request: &ValidationRequest,
        account_number: &str,
    ) -> CheckOutcome {
        run_check(record, request.sort_code(), account_number, &self.substitutes)
    }
}

/// Exception 14 correction: when the eighth digit is 0, 1 or 9, drop it and
/// prepend a zero. Any other (or missing) eighth digit means no retry.
pub fn corrected_account_number(account_number: &str) -> Option<String> {
    match account_number.as_bytes().get(CORRECTION_DIGIT_INDEX).copied() {
        Some(b'0' | b'1' | b'9') => {
            let mut corrected = String::with_capacity(account_number.len());
            corrected.push('0');
            corrected.push_str(&account_number[..CORRECTION_DIGIT_INDEX]);
            corrected.push_str(&account_number[CORRECTION_DIGIT_INDEX + 1..]);
            Some(corrected)
        }
        _ => None,
    }
}

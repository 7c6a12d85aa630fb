//! Single modulus check.
//!
//! One weight record is checked in four steps:
//! - `number`: compose sort code + account number (exceptions 5, 8, 9)
//! - `skip`: bypass the check (exceptions 3, 6)
//! - `weights`: pick the effective weights (exceptions 2, 7, 10)
//! - `checksum`: weighted sum, remainder and pass rule (exceptions 1, 4, 5)
//!
//! Checks never fail with an error. A number too short to weight all 14
//! positions yields [`CheckResult::Incomplete`], which counts as a failure.

pub mod checksum;
pub mod number;
pub mod skip;
pub mod weights;

use crate::data::{Exception, SubstitutionTable, WeightRecord, WEIGHT_COUNT};
use crate::engine::result::{CheckOutcome, CheckResult};

/// Run the full check for `record` against `account_number`.
///
/// `account_number` is the request's own account number, or the corrected
/// one produced for the exception 14 retry.
pub fn run_check(
    record: &WeightRecord,
    sort_code: &str,
    account_number: &str,
    substitutes: &SubstitutionTable,
) -> CheckOutcome {
    let number = number::compose(record, sort_code, account_number, substitutes);

    if skip::is_skippable(record, &number) {
        return CheckOutcome {
            record: record.clone(),
            account_number: account_number.to_string(),
            number,
            weights: None,
            result: CheckResult::Skip {
                reason: skip_reason(record),
            },
        };
    }

    let weights = weights::resolve_weights(record, &number);

    let result = match checksum::evaluate(&number, &weights, record.modulus, record.exception) {
        Some(checksum) if checksum.passed => CheckResult::Pass { checksum },
        Some(checksum) => CheckResult::Fail { checksum },
        None => CheckResult::Incomplete {
            digits: number.as_str().len().min(WEIGHT_COUNT),
        },
    };

    CheckOutcome {
        record: record.clone(),
        account_number: account_number.to_string(),
        number,
        weights: Some(weights),
        result,
    }
}

fn skip_reason(record: &WeightRecord) -> &'static str {
    match record.exception {
        Some(Exception::E3) => "exception 3: position c is 6 or 9",
        Some(Exception::E6) => "exception 6: foreign currency account",
        _ => "check bypassed",
    }
}

//! Composition of the number that gets checksummed.
//!
//! The composed number is the effective sort code followed by the account
//! number. Only its first 14 characters take part in a check. Nothing is padded:
//! for account numbers shorter than 8 digits the trailing positions simply do
//! not exist, and any rule that reads them sees `None`.

use crate::data::{Exception, SubstitutionTable, WeightRecord, WEIGHT_COUNT};
use serde::Serialize;
use std::fmt;

/// Sort code used in place of the real one for exception 8
pub const EXCEPTION_8_SORT_CODE: &str = "090126";

/// Sort code used in place of the real one for exception 9
pub const EXCEPTION_9_SORT_CODE: &str = "309634";

/// Named digit positions of the composed number
pub mod position {
    pub const U: usize = 0;
    pub const V: usize = 1;
    pub const W: usize = 2;
    pub const X: usize = 3;
    pub const Y: usize = 4;
    pub const Z: usize = 5;
    pub const A: usize = 6;
    pub const B: usize = 7;
    pub const C: usize = 8;
    pub const D: usize = 9;
    pub const E: usize = 10;
    pub const F: usize = 11;
    pub const G: usize = 12;
    pub const H: usize = 13;
}

/// Sort code + account number digit string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComposedNumber(String);

impl ComposedNumber {
    pub fn new(sort_code: &str, account_number: &str) -> Self {
        ComposedNumber(format!("{}{}", sort_code, account_number))
    }

    /// Digit at `index`, or `None` past the end of the string
    pub fn digit(&self, index: usize) -> Option<u32> {
        self.0
            .as_bytes()
            .get(index)
            .filter(|b| b.is_ascii_digit())
            .map(|b| u32::from(b - b'0'))
    }

    /// The 14 weighted digits, `None` when the number is too short
    pub fn weighted_digits(&self) -> Option<[u32; WEIGHT_COUNT]> {
        let mut digits = [0u32; WEIGHT_COUNT];
        for (index, slot) in digits.iter_mut().enumerate() {
            *slot = self.digit(index)?;
        }
        Some(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComposedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the number for `record` from the request's sort code and the
/// account number in use (the request's own, or the exception 14 correction).
pub fn compose(
    record: &WeightRecord,
    sort_code: &str,
    account_number: &str,
    substitutes: &SubstitutionTable,
) -> ComposedNumber {
    match record.exception {
        Some(Exception::E5) => {
            let substituted = sort_code
                .parse::<u32>()
                .ok()
                .and_then(|code| substitutes.substitute(code));
            match substituted {
                Some(code) => ComposedNumber::new(&format!("{:06}", code), account_number),
                None => ComposedNumber::new(sort_code, account_number),
            }
        }
        Some(Exception::E8) => ComposedNumber::new(EXCEPTION_8_SORT_CODE, account_number),
        Some(Exception::E9) => ComposedNumber::new(EXCEPTION_9_SORT_CODE, account_number),
        _ => ComposedNumber::new(sort_code, account_number),
    }
}

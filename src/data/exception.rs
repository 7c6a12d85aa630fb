//! Exception codes attached to weight records.
//!
//! The published standard defines fourteen numbered deviations from the base
//! algorithm. Each step of a check (`checks::skip`, `checks::weights`,
//! `checks::checksum`) matches on this enum exhaustively so every rule can be
//! audited in one place.

use serde::Serialize;
use std::fmt;

/// Exception code 1–14 from the weight table's last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Exception {
    /// Add 27 to the total (implied institution prefix 580149)
    E1,
    /// Replace weights depending on positions a and g
    E2,
    /// Skip the check when position c is 6 or 9
    E3,
    /// Remainder must equal the two-digit check number gh
    E4,
    /// Substitute the sort code; check digit at g (MOD11) or h (DBLAL)
    E5,
    /// Skip the check for foreign currency accounts (a in 4..=8, g == h)
    E6,
    /// Zero weights u..b when g is 9
    E7,
    /// Use sort code 090126
    E8,
    /// Use sort code 309634
    E9,
    /// Zero weights u..b when ab is 09 or 99
    E10,
    /// Either of the two checks may pass (paired with 10)
    E11,
    /// Either of the two checks may pass (paired with 13)
    E12,
    /// Either of the two checks may pass (paired with 12)
    E13,
    /// Retry with the eighth account digit removed
    E14,
}

impl Exception {
    /// Map a numeric code from the table. `0` means no exception.
    pub fn from_code(code: u8) -> Option<Option<Exception>> {
        let exception = match code {
            0 => return Some(None),
            1 => Exception::E1,
            2 => Exception::E2,
            3 => Exception::E3,
            4 => Exception::E4,
            5 => Exception::E5,
            6 => Exception::E6,
            7 => Exception::E7,
            8 => Exception::E8,
            9 => Exception::E9,
            10 => Exception::E10,
            11 => Exception::E11,
            12 => Exception::E12,
            13 => Exception::E13,
            14 => Exception::E14,
            _ => return None,
        };
        Some(Some(exception))
    }

    /// Numeric code as printed in the published table
    pub fn code(self) -> u8 {
        match self {
            Exception::E1 => 1,
            Exception::E2 => 2,
            Exception::E3 => 3,
            Exception::E4 => 4,
            Exception::E5 => 5,
            Exception::E6 => 6,
            Exception::E7 => 7,
            Exception::E8 => 8,
            Exception::E9 => 9,
            Exception::E10 => 10,
            Exception::E11 => 11,
            Exception::E12 => 12,
            Exception::E13 => 13,
            Exception::E14 => 14,
        }
    }

    /// Whether a pair of checks led by this exception is an "either may pass"
    /// pair: a passing first check is final, a failing one defers to the second.
    ///
    /// For every other code both checks must pass.
    pub fn either_check_suffices(self) -> bool {
        matches!(
            self,
            Exception::E2
                | Exception::E9
                | Exception::E10
                | Exception::E11
                | Exception::E12
                | Exception::E13
                | Exception::E14
        )
    }
}

impl From<Exception> for u8 {
    fn from(exception: Exception) -> u8 {
        exception.code()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

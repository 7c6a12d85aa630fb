//! Weighted sum and remainder test.
//!
//! # Algorithm
//!
//! 1. Multiply each of the 14 digits by its weight.
//! 2. MOD10/MOD11 sum the products. DBLAL sums the decimal digits of every
//!    product instead (a product of 12 contributes 1 + 2).
//! 3. Exception 1 adds 27 to the total.
//! 4. Take the remainder modulo 11 (MOD11) or 10 (MOD10, DBLAL).
//! 5. Exceptions 4 and 5 compare the remainder against check digits; every
//!    other record passes on a zero remainder.

use crate::checks::number::{position, ComposedNumber};
use crate::data::{Exception, ModulusKind, WEIGHT_COUNT};
use serde::Serialize;

/// Added to the total for exception 1: the doubled-alternate digit sum of the
/// institution number 580149 that notionally precedes the sort code.
pub const EXCEPTION_1_ADJUSTMENT: i32 = 27;

/// Outcome of one checksum evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checksum {
    pub total: i32,
    pub remainder: i32,
    pub passed: bool,
}

/// Evaluate the checksum of `number` with `weights`.
///
/// Returns `None` when the number has fewer than 14 digits: the sum is
/// undefined and the check cannot pass.
pub fn evaluate(
    number: &ComposedNumber,
    weights: &[i32; WEIGHT_COUNT],
    modulus: ModulusKind,
    exception: Option<Exception>,
) -> Option<Checksum> {
    let digits = number.weighted_digits()?;

    let products = digits
        .iter()
        .zip(weights.iter())
        .map(|(digit, weight)| *digit as i32 * weight);

    let mut total: i32 = match modulus {
        ModulusKind::DoubleAlternate => products.map(digit_sum).sum(),
        ModulusKind::Mod10 | ModulusKind::Mod11 => products.sum(),
    };

    if exception == Some(Exception::E1) {
        total += EXCEPTION_1_ADJUSTMENT;
    }

    let remainder = total % modulus.base();
    let passed = remainder_passes(number, remainder, modulus, exception);

    log::trace!(
        "{} {} ex{:?}: total {} remainder {} -> {}",
        number,
        modulus,
        exception.map(Exception::code),
        total,
        remainder,
        if passed { "pass" } else { "fail" }
    );

    Some(Checksum {
        total,
        remainder,
        passed,
    })
}

/// Pass/fail rule for a computed remainder
fn remainder_passes(
    number: &ComposedNumber,
    remainder: i32,
    modulus: ModulusKind,
    exception: Option<Exception>,
) -> bool {
    // Both digits exist once the weighted sum was computed.
    let g = number.digit(position::G).map_or(-1, |d| d as i32);
    let h = number.digit(position::H).map_or(-1, |d| d as i32);

    match exception {
        Some(Exception::E4) => remainder == g + h,
        Some(Exception::E5) => match modulus {
            ModulusKind::DoubleAlternate => (remainder == 0 && h == 0) || h == 10 - remainder,
            ModulusKind::Mod10 | ModulusKind::Mod11 => {
                if remainder == 1 {
                    false
                } else if remainder == 0 && g == 0 {
                    true
                } else {
                    g == 11 - remainder
                }
            }
        },
        Some(
            Exception::E1
            | Exception::E2
            | Exception::E3
            | Exception::E6
            | Exception::E7
            | Exception::E8
            | Exception::E9
            | Exception::E10
            | Exception::E11
            | Exception::E12
            | Exception::E13
            | Exception::E14,
        )
        | None => remainder == 0,
    }
}

/// Sum of the decimal digits of a weighted product
fn digit_sum(product: i32) -> i32 {
    let mut value = product.unsigned_abs();
    let mut sum = 0;
    while value > 0 {
        sum += (value % 10) as i32;
        value /= 10;
    }
    sum
}

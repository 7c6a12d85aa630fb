//! Effective weight resolution.
//!
//! Exceptions 2, 7 and 10 replace a record's published weights depending on
//! digits of the composed number. Every other record is checked with its own
//! weights.

use crate::checks::number::{position, ComposedNumber};
use crate::data::{Exception, WeightRecord, WEIGHT_COUNT};

/// Exception 2 weights when a != 0 and g != 9
pub const EXCEPTION_2_WEIGHTS: [i32; WEIGHT_COUNT] = [0, 0, 1, 2, 5, 3, 6, 4, 8, 7, 10, 9, 3, 1];

/// Exception 2 weights when a != 0 and g == 9
pub const EXCEPTION_2_G9_WEIGHTS: [i32; WEIGHT_COUNT] = [0, 0, 0, 0, 0, 0, 0, 0, 8, 7, 10, 9, 3, 1];

/// Weight vector to use for `record` against `number`
pub fn resolve_weights(record: &WeightRecord, number: &ComposedNumber) -> [i32; WEIGHT_COUNT] {
    match record.exception {
        Some(Exception::E2) => {
            let a = number.digit(position::A);
            let g = number.digit(position::G);
            match (a, g) {
                (Some(0), _) => record.weights,
                (_, Some(9)) => EXCEPTION_2_G9_WEIGHTS,
                _ => EXCEPTION_2_WEIGHTS,
            }
        }
        Some(Exception::E7) => {
            if number.digit(position::G) == Some(9) {
                zero_sort_code_and_ab(record)
            } else {
                record.weights
            }
        }
        Some(Exception::E10) => {
            let a = number.digit(position::A);
            let b = number.digit(position::B);
            match (a, b) {
                (Some(0), Some(9)) | (Some(9), Some(9)) => zero_sort_code_and_ab(record),
                _ => record.weights,
            }
        }
        Some(
            Exception::E1
            | Exception::E3
            | Exception::E4
            | Exception::E5
            | Exception::E6
            | Exception::E8
            | Exception::E9
            | Exception::E11
            | Exception::E12
            | Exception::E13
            | Exception::E14,
        )
        | None => record.weights,
    }
}

/// Zero positions u through b, keeping the record's c through h
fn zero_sort_code_and_ab(record: &WeightRecord) -> [i32; WEIGHT_COUNT] {
    let mut weights = record.weights;
    weights[..position::C].fill(0);
    weights
}

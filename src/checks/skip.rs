//! Structural exceptions that bypass a check entirely.

use crate::checks::number::{position, ComposedNumber};
use crate::data::{Exception, WeightRecord};

/// Whether the check for `record` is bypassed and counts as passed.
///
/// Exception 3: position c is 6 or 9.
/// Exception 6: position a is 4 to 8 and g equals h (foreign currency account).
pub fn is_skippable(record: &WeightRecord, number: &ComposedNumber) -> bool {
    match record.exception {
        Some(Exception::E3) => matches!(number.digit(position::C), Some(6) | Some(9)),
        Some(Exception::E6) => {
            let a_in_range = matches!(number.digit(position::A), Some(4..=8));
            let g = number.digit(position::G);
            let h = number.digit(position::H);
            a_in_range && g.is_some() && g == h
        }
        Some(
            Exception::E1
            | Exception::E2
            | Exception::E4
            | Exception::E5
            | Exception::E7
            | Exception::E8
            | Exception::E9
            | Exception::E10
            | Exception::E11
            | Exception::E12
            | Exception::E13
            | Exception::E14,
        )
        | None => false,
    }
}

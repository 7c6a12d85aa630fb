//! Sort code range lookup.

use crate::data::{WeightRecord, WeightTable};

/// The checks defined for one sort code, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicableChecks<'a> {
    None,
    Single(&'a WeightRecord),
    Pair(&'a WeightRecord, &'a WeightRecord),
}

impl<'a> ApplicableChecks<'a> {
    /// The record that decides first
    pub fn first(&self) -> Option<&'a WeightRecord> {
        match *self {
            ApplicableChecks::None => None,
            ApplicableChecks::Single(first) | ApplicableChecks::Pair(first, _) => Some(first),
        }
    }

    pub fn second(&self) -> Option<&'a WeightRecord> {
        match *self {
            ApplicableChecks::Pair(_, second) => Some(second),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ApplicableChecks::None => 0,
            ApplicableChecks::Single(_) => 1,
            ApplicableChecks::Pair(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ApplicableChecks::None)
    }

    pub fn to_vec(&self) -> Vec<&'a WeightRecord> {
        self.first().into_iter().chain(self.second()).collect()
    }
}

/// Find the records whose range contains `sort_code`.
///
/// Scans in table order and stops at the second match; the standard never
/// defines more than two checks for one sort code. Records that start after
/// the sort code cannot match, so the scan ends there.
pub fn resolve(table: &WeightTable, sort_code: u32) -> ApplicableChecks<'_> {
    let mut found = table
        .records()
        .iter()
        .take_while(|record| record.start <= sort_code)
        .filter(|record| record.contains(sort_code));

    let checks = match (found.next(), found.next()) {
        (None, _) => ApplicableChecks::None,
        (Some(first), None) => ApplicableChecks::Single(first),
        (Some(first), Some(second)) => ApplicableChecks::Pair(first, second),
    };

    log::debug!("sort code {:06}: {} applicable check(s)", sort_code, checks.len());
    checks
}

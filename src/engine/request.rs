//! Validation request normalization.

use crate::{ModCheckError, Result};
use serde::Serialize;

/// Sort code length required by the standard
pub const SORT_CODE_LENGTH: usize = 6;

/// Shortest account number accepted
pub const MIN_ACCOUNT_LENGTH: usize = 6;

/// Longest account number accepted
pub const MAX_ACCOUNT_LENGTH: usize = 10;

/// A sort code and account number pair, stripped of formatting.
///
/// Lengths are not checked here: a structurally wrong pair is a valid request
/// that simply evaluates to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRequest {
    sort_code: String,
    account_number: String,
}

impl ValidationRequest {
    /// Normalize a sort code and account number.
    ///
    /// Hyphens and spaces are removed. Anything else that is not an ASCII digit
    /// is rejected with [`ModCheckError::InvalidInput`].
    pub fn new(sort_code: &str, account_number: &str) -> Result<Self> {
        Ok(ValidationRequest {
            sort_code: sanitize("sort code", sort_code)?,
            account_number: sanitize("account number", account_number)?,
        })
    }

    pub fn sort_code(&self) -> &str {
        &self.sort_code
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Whether both fields have lengths the standard can check
    pub fn is_well_formed(&self) -> bool {
        self.sort_code.len() == SORT_CODE_LENGTH
            && (MIN_ACCOUNT_LENGTH..=MAX_ACCOUNT_LENGTH).contains(&self.account_number.len())
    }

    /// Numeric value of the sort code, used for range lookup
    pub fn sort_code_value(&self) -> Option<u32> {
        self.sort_code.parse().ok()
    }
}

fn sanitize(field: &'static str, value: &str) -> Result<String> {
    let stripped: String = value.chars().filter(|c| *c != '-' && *c != ' ').collect();

    if !stripped.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ModCheckError::InvalidInput {
            field,
            value: value.to_string(),
        });
    }

    Ok(stripped)
}

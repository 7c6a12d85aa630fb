//! Command handlers for uk-modcheck
//!
//! - `validate`: Check one sort code and account number
//! - `batch`: Check a file of `sort_code,account_number` pairs
//! - `lookup`: Show the reference data for a sort code

pub mod batch;
pub mod lookup;
pub mod validate;

/// Rendered command output and whether the command succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    /// False when any account details were invalid
    pub success: bool,
}

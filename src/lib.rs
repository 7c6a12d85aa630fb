//! uk-modcheck library
//!
//! UK sort code and account number validation using the published modulus
//! checking standard.
//!
//! This library provides:
//! - The published weight and sort code substitution tables, embedded
//! - Loaders for newer copies of those tables from disk
//! - The check engine: range lookup, exception handling, MOD10 / MOD11 /
//!   double-alternate checksums and the two-check combination rules
//! - An evaluation trace explaining every verdict
//!
//! A modulus check only rejects account details that cannot be correct. It
//! does not prove that an account exists.
//!
//! # Example
//!
//! ```
//! use uk_modcheck::{ModulusChecker, ValidationRequest};
//!
//! let request = ValidationRequest::new("08-99-99", "66374958").unwrap();
//! assert!(ModulusChecker::standard().is_valid(&request));
//! ```

pub mod checks;
pub mod cli;
pub mod commands;
pub mod data;
pub mod engine;
pub mod version;

use cli::args::Args;
use std::path::PathBuf;

// Re-exports for public API
pub use data::{Exception, ModulusKind, SubstitutionTable, WeightRecord, WeightTable};
pub use engine::orchestrator::ModulusChecker;
pub use engine::request::ValidationRequest;
pub use engine::result::{CheckOutcome, CheckResult, Evaluation, Resolution};

/// Error types for uk-modcheck operations.
#[derive(Debug, thiserror::Error)]
pub enum ModCheckError {
    /// Sort code or account number contains characters other than digits,
    /// hyphens and spaces
    #[error("invalid {field}: '{value}' must contain only digits")]
    InvalidInput { field: &'static str, value: String },

    /// A reference table line could not be parsed
    #[error("{table} line {line}: {message}")]
    TableParse {
        table: &'static str,
        line: usize,
        message: String,
    },

    /// A reference table violates its ordering or uniqueness rules
    #[error("invalid {table}: {message}")]
    InvalidTable { table: &'static str, message: String },

    /// A file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for uk-modcheck operations
pub type Result<T> = std::result::Result<T, ModCheckError>;

/// Where the checker's reference tables come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Weight table in valacdos format (None = embedded table)
    pub weight_table: Option<PathBuf>,
    /// Substitution table in scsubtab format (None = embedded table)
    pub substitution_table: Option<PathBuf>,
}

impl CheckerConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        CheckerConfig {
            weight_table: args.weights.clone(),
            substitution_table: args.substitutes.clone(),
        }
    }
}

/// Build a checker from configuration.
///
/// Tables not named in `config` come from the embedded published copies.
pub fn build_checker(config: &CheckerConfig) -> Result<ModulusChecker> {
    let weights = match &config.weight_table {
        Some(path) => WeightTable::from_file(path)?,
        None => WeightTable::standard().clone(),
    };

    let substitutes = match &config.substitution_table {
        Some(path) => SubstitutionTable::from_file(path)?,
        None => SubstitutionTable::standard().clone(),
    };

    Ok(ModulusChecker::new(weights, substitutes))
}

/// Validate a sort code and account number against the embedded tables.
///
/// Hyphens and spaces are ignored. Any other non-digit character is an error;
/// wrong lengths are simply invalid.
///
/// # Example
///
/// ```
/// assert!(uk_modcheck::is_valid("089999", "66374958").unwrap());
/// assert!(!uk_modcheck::is_valid("089999", "66374959").unwrap());
/// assert!(uk_modcheck::is_valid("08999X", "66374958").is_err());
/// ```
pub fn is_valid(sort_code: &str, account_number: &str) -> Result<bool> {
    let request = ValidationRequest::new(sort_code, account_number)?;
    Ok(ModulusChecker::standard().is_valid(&request))
}

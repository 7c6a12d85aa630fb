//! Single pair validation command

use crate::cli::args::Args;
use crate::cli::output::get_formatter;
use crate::commands::CommandOutput;
use crate::{ModulusChecker, Result, ValidationRequest};

/// Validate one sort code and account number.
///
/// Non-digit input is an error; a wrong length is an invalid verdict.
pub fn run(
    args: &Args,
    checker: &ModulusChecker,
    sort_code: &str,
    account_number: &str,
) -> Result<CommandOutput> {
    let request = ValidationRequest::new(sort_code, account_number)?;
    let evaluation = checker.evaluate(&request);

    let formatter = get_formatter(args.format, args.no_color, args.verbose);
    Ok(CommandOutput {
        text: formatter.format_evaluation(&evaluation),
        success: evaluation.valid,
    })
}

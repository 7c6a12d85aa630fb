//! Sort code lookup command

use crate::cli::args::Args;
use crate::cli::output::get_formatter;
use crate::commands::CommandOutput;
use crate::{ModCheckError, ModulusChecker, Result};

/// Show the weight records and substitute that apply to `sort_code`
pub fn run(args: &Args, checker: &ModulusChecker, sort_code: &str) -> Result<CommandOutput> {
    let lookup = checker
        .lookup(sort_code)
        .ok_or_else(|| ModCheckError::InvalidInput {
            field: "sort code",
            value: sort_code.to_string(),
        })?;

    let formatter = get_formatter(args.format, args.no_color, args.verbose);
    Ok(CommandOutput {
        text: formatter.format_lookup(&lookup),
        success: true,
    })
}

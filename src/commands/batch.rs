//! Batch validation command
//!
//! Reads one `sort_code,account_number` pair per line. A pair may also be
//! separated by whitespace when the line has no comma. Blank lines and lines
//! starting with `#` are ignored.

use crate::cli::args::Args;
use crate::cli::output::get_formatter;
use crate::commands::CommandOutput;
use crate::engine::result::BatchReport;
use crate::{ModCheckError, ModulusChecker, Result, ValidationRequest};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Validate every pair in `file` (or stdin for `-`).
pub fn run(args: &Args, checker: &ModulusChecker, file: &Path) -> Result<CommandOutput> {
    let report = if file == Path::new(STDIN_PATH) {
        validate_lines(checker, io::stdin().lock(), file)?
    } else {
        let handle = File::open(file).map_err(|source| ModCheckError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        validate_lines(checker, BufReader::new(handle), file)?
    };

    let formatter = get_formatter(args.format, args.no_color, args.verbose);
    Ok(CommandOutput {
        text: formatter.format_batch(&report),
        success: report.all_valid(),
    })
}

/// Validate each line of `reader`.
///
/// Malformed lines are recorded as rejected and do not stop the run. `path`
/// only labels read errors.
pub fn validate_lines<R: BufRead>(
    checker: &ModulusChecker,
    reader: R,
    path: &Path,
) -> Result<BatchReport> {
    let mut report = BatchReport::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ModCheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let line_number = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (sort_code, account_number) = match split_pair(trimmed) {
            Some(pair) => pair,
            None => {
                log::debug!("line {}: expected two fields", line_number);
                report.add_rejected(
                    line_number,
                    trimmed,
                    "expected sort_code,account_number".to_string(),
                );
                continue;
            }
        };

        match ValidationRequest::new(sort_code, account_number) {
            Ok(request) => report.add_evaluation(checker.evaluate(&request)),
            Err(e) => report.add_rejected(line_number, trimmed, e.to_string()),
        }
    }

    Ok(report)
}

fn split_pair(line: &str) -> Option<(&str, &str)> {
    if let Some((sort_code, account_number)) = line.split_once(',') {
        if account_number.contains(',') {
            return None;
        }
        return Some((sort_code.trim(), account_number.trim()));
    }

    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(sort_code), Some(account_number), None) => Some((sort_code, account_number)),
        _ => None,
    }
}

//! Output formatting for uk-modcheck.
//!
//! Provides terminal and JSON output formatters.
//!
//! Every formatter produces valid output for any input, including empty batch
//! reports and sort codes without checks. No function in this module panics.

use crate::cli::args::OutputFormat;
use crate::engine::result::{BatchReport, CheckOutcome, Evaluation, SortCodeLookup};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the verdict for a single pair
    fn format_evaluation(&self, evaluation: &Evaluation) -> String;

    /// Format the results of a batch run
    fn format_batch(&self, report: &BatchReport) -> String;

    /// Format the reference data for a sort code
    fn format_lookup(&self, lookup: &SortCodeLookup) -> String;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool) -> Self {
        TerminalFormatter { color, verbose }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn gray(&self, text: &str) -> String {
        self.colorize(text, "90")
    }

    fn verdict(&self, valid: bool) -> String {
        if valid {
            self.green("VALID")
        } else {
            self.red("INVALID")
        }
    }

    fn format_check(&self, index: usize, check: &CheckOutcome) -> String {
        let mut output = format!(
            "  check {}: {:06}-{:06} {}",
            index + 1,
            check.record.start,
            check.record.end,
            check.record.modulus
        );
        if let Some(exception) = check.record.exception {
            output.push_str(&format!(" (exception {})", exception));
        }
        output.push('\n');
        output.push_str(&format!("    number:  {}\n", check.number));
        if let Some(weights) = &check.weights {
            let weights: Vec<String> = weights.iter().map(|w| w.to_string()).collect();
            output.push_str(&format!("    weights: {}\n", weights.join(" ")));
        }
        output.push_str(&format!("    result:  {}\n", check.result));
        output
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format_evaluation(&self, evaluation: &Evaluation) -> String {
        let mut output = format!(
            "{} {}: {}",
            evaluation.sort_code,
            evaluation.account_number,
            self.verdict(evaluation.valid)
        );

        if self.verbose {
            output.push_str(&format!(" {}\n", self.gray(&format!("({})", evaluation.resolution))));
            for (index, check) in evaluation.checks.iter().enumerate() {
                output.push_str(&self.format_check(index, check));
            }
            // Trailing newline is added by the caller
            if output.ends_with('\n') {
                output.pop();
            }
        }

        output
    }

    fn format_batch(&self, report: &BatchReport) -> String {
        let mut output = String::new();

        for evaluation in &report.evaluations {
            output.push_str(&self.format_evaluation(evaluation));
            output.push('\n');
        }

        for rejected in &report.rejected {
            output.push_str(&format!(
                "line {}: {} {}\n",
                rejected.line,
                self.red("REJECTED"),
                rejected.reason
            ));
        }

        let summary = report.summary();
        output.push_str(&format!(
            "SUMMARY: {} valid, {} invalid, {} rejected ({} total)",
            summary.valid, summary.invalid, summary.rejected, summary.total
        ));

        output
    }

    fn format_lookup(&self, lookup: &SortCodeLookup) -> String {
        let mut output = format!("Sort code: {}\n", lookup.sort_code);

        if lookup.records.is_empty() {
            output.push_str("No modulus check defined; account numbers are presumed valid");
            return output;
        }

        for (index, record) in lookup.records.iter().enumerate() {
            output.push_str(&format!("  check {}: {}\n", index + 1, record));
        }

        match lookup.substitute {
            Some(substitute) => output.push_str(&format!("Substitute sort code: {:06}", substitute)),
            None => output.push_str(&self.gray("Substitute sort code: none")),
        }

        output
    }
}

/// JSON formatter
#[cfg(feature = "json")]
pub struct JsonFormatter {
    pretty: bool,
}

#[cfg(feature = "json")]
impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> String {
        let result = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };

        result.unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }
}

#[cfg(feature = "json")]
impl OutputFormatter for JsonFormatter {
    fn format_evaluation(&self, evaluation: &Evaluation) -> String {
        self.to_json(evaluation)
    }

    fn format_batch(&self, report: &BatchReport) -> String {
        self.to_json(&serde_json::json!({
            "summary": report.summary(),
            "evaluations": report.evaluations,
            "rejected": report.rejected,
        }))
    }

    fn format_lookup(&self, lookup: &SortCodeLookup) -> String {
        self.to_json(lookup)
    }
}

/// Get the appropriate formatter for the output format
pub fn get_formatter(format: OutputFormat, no_color: bool, verbose: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(!no_color, verbose)),
        #[cfg(feature = "json")]
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        #[cfg(not(feature = "json"))]
        OutputFormat::Json => {
            log::warn!("JSON output requires the `json` feature; using text output");
            Box::new(TerminalFormatter::new(!no_color, verbose))
        }
    }
}

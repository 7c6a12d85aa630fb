//! Command line arguments for uk-modcheck.
//!
//! Global options may appear before or after the subcommand. Table paths and
//! the output format can also be set through the environment.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command to execute
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Validate one sort code and account number
    Validate {
        /// Sort code, e.g. 08-99-99
        sort_code: String,
        /// Account number, 6 to 10 digits
        account_number: String,
    },
    /// Validate `sort_code,account_number` pairs, one per line
    Batch {
        /// Input file, or `-` for stdin
        file: PathBuf,
    },
    /// Show the modulus checks defined for a sort code
    Lookup {
        /// Sort code, e.g. 93-86-96
        sort_code: String,
    },
    /// Print version information
    Version,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Parsed command line arguments
#[derive(Debug, Clone, Parser)]
#[command(
    name = "uk-modcheck",
    version,
    about = "Validate UK sort codes and account numbers with the modulus checking standard"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Weight table in valacdos format (default: embedded table)
    #[arg(long, global = true, value_name = "FILE", env = "UK_MODCHECK_WEIGHTS")]
    pub weights: Option<PathBuf>,

    /// Substitution table in scsubtab format (default: embedded table)
    #[arg(long, global = true, value_name = "FILE", env = "UK_MODCHECK_SUBSTITUTES")]
    pub substitutes: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "UK_MODCHECK_FORMAT"
    )]
    pub format: OutputFormat,

    /// Show every check that ran and enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

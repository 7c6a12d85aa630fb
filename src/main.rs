//! uk-modcheck CLI entry point
//!
//! Validates UK sort codes and account numbers with the modulus checking standard.

use clap::Parser;
use uk_modcheck::cli::args::{Args, Command};
use uk_modcheck::commands::{batch, lookup, validate, CommandOutput};
use uk_modcheck::version::get_build_info;
use uk_modcheck::{build_checker, CheckerConfig};

use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported as errors by clap
            return if e.use_stderr() {
                ExitCode::from(3)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(output) => {
            println!("{}", output.text);
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(3)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> uk_modcheck::Result<CommandOutput> {
    // Tables are only loaded by commands that use them
    let checker = || build_checker(&CheckerConfig::from_args(args));

    match &args.command {
        Command::Validate {
            sort_code,
            account_number,
        } => validate::run(args, &checker()?, sort_code, account_number),
        Command::Batch { file } => batch::run(args, &checker()?, file),
        Command::Lookup { sort_code } => lookup::run(args, &checker()?, sort_code),
        Command::Version => Ok(CommandOutput {
            text: get_build_info().to_string(),
            success: true,
        }),
    }
}

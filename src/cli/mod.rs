//! CLI module for argument parsing and output formatting.
//!
//! Arguments are parsed with `clap`; output is rendered as terminal text or JSON.

pub mod args;
pub mod output;

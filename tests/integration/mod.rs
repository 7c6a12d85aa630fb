//! Integration tests for uk-modcheck.
//!
//! These tests exercise the checker against the published tables and against
//! the small mock tables in `mocks`.

pub mod cli_tests;
pub mod orchestrator_tests;
pub mod output_tests;

//! Validation engine module.
//!
//! Provides request normalization, range lookup, check orchestration and
//! result reporting.

pub mod orchestrator;
pub mod range;
pub mod request;
pub mod result;

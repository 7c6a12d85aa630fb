//! Version and build information.
//!
//! Provides version, git commit, and build metadata.

use std::fmt;

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub target: &'static str,
    pub rustc_version: Option<&'static str>,
    /// Weight records in the embedded table
    pub weight_records: usize,
    /// Entries in the embedded substitution table
    pub substitutions: usize,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "uk-modcheck {}", self.version)?;

        if let Some(commit) = self.commit {
            writeln!(f, "Commit: {}", commit)?;
        }

        if let Some(date) = self.build_date {
            writeln!(f, "Built: {}", date)?;
        }

        writeln!(f, "Target: {}", self.target)?;

        if let Some(rustc) = self.rustc_version {
            writeln!(f, "Rustc: {}", rustc)?;
        }

        write!(
            f,
            "Tables: {} weight records, {} substitutions",
            self.weight_records, self.substitutions
        )
    }
}

/// Get build information
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("UK_MODCHECK_GIT_HASH"),
        build_date: option_env!("UK_MODCHECK_BUILD_DATE"),
        target: option_env!("TARGET").unwrap_or(std::env::consts::ARCH),
        rustc_version: option_env!("UK_MODCHECK_RUSTC_VERSION"),
        weight_records: crate::WeightTable::standard().len(),
        substitutions: crate::SubstitutionTable::standard().len(),
    }
}

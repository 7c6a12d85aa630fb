//! Sort code substitution table
//!
//! Some sort codes must be replaced by another sort code before the checksum
//! is computed (exception 5). The published scsubtab file lists those pairs.

use crate::{ModCheckError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Embedded copy of the published substitution table
const SCSUBTAB: &str = include_str!("scsubtab.txt");

const TABLE_NAME: &str = "substitution table";

/// One `original -> substitute` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubstitutionEntry {
    pub original: u32,
    pub substitute: u32,
}

/// Immutable sort code substitution lookup
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    entries: Vec<SubstitutionEntry>,
    index: HashMap<u32, u32>,
}

impl SubstitutionTable {
    /// Build a table from already-parsed entries. Originals must be unique.
    pub fn from_entries(entries: Vec<SubstitutionEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for entry in &entries {
            if index.insert(entry.original, entry.substitute).is_some() {
                return Err(ModCheckError::InvalidTable {
                    table: TABLE_NAME,
                    message: format!("sort code {:06} is listed more than once", entry.original),
                });
            }
        }

        Ok(SubstitutionTable { entries, index })
    }

    /// Parse the scsubtab text format: `original substitute` per line
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let parse_error = |message: String| ModCheckError::TableParse {
                table: TABLE_NAME,
                line: index + 1,
                message,
            };

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(parse_error(format!("expected 2 fields, found {}", fields.len())));
            }

            let parse_code = |field: &str| -> std::result::Result<u32, String> {
                if field.len() != 6 || !field.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(format!("invalid sort code '{}'", field));
                }
                field
                    .parse::<u32>()
                    .map_err(|_| format!("invalid sort code '{}'", field))
            };

            entries.push(SubstitutionEntry {
                original: parse_code(fields[0]).map_err(parse_error)?,
                substitute: parse_code(fields[1]).map_err(parse_error)?,
            });
        }

        Self::from_entries(entries)
    }

    /// Load a table in scsubtab format from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ModCheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&content)?;
        log::warn!(
            "using substitution table from {} ({} entries) instead of the embedded table",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// The embedded published table, parsed once per process
    pub fn standard() -> &'static SubstitutionTable {
        static STANDARD: OnceLock<SubstitutionTable> = OnceLock::new();
        STANDARD.get_or_init(|| match Self::parse(SCSUBTAB) {
            Ok(table) => table,
            Err(e) => unreachable!("embedded substitution table is malformed: {}", e),
        })
    }

    /// Substitute sort code for `sort_code`, if one is listed
    pub fn substitute(&self, sort_code: u32) -> Option<u32> {
        self.index.get(&sort_code).copied()
    }

    /// Entries in file order
    pub fn entries(&self) -> &[SubstitutionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

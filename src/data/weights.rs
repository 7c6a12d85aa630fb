//! Modulus weight table
//!
//! Range-keyed weight records as published in the valacdos file. Records are
//! ordered by range start; two records with the same range mean both checks
//! apply to every sort code in it.

use crate::data::exception::Exception;
use crate::{ModCheckError, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

/// Embedded copy of the published weight table
const VALACDOS: &str = include_str!("valacdos.txt");

const TABLE_NAME: &str = "weight table";

/// Number of weighted positions (sort code + first 8 account digits)
pub const WEIGHT_COUNT: usize = 14;

/// Checksum flavour of a weight record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModulusKind {
    /// Standard modulus 10
    #[serde(rename = "MOD10")]
    Mod10,
    /// Standard modulus 11
    #[serde(rename = "MOD11")]
    Mod11,
    /// Double alternate: products are split into digits before summing, modulus 10
    #[serde(rename = "DBLAL")]
    DoubleAlternate,
}

impl ModulusKind {
    /// Divisor used for the remainder
    pub fn base(self) -> i32 {
        match self {
            ModulusKind::Mod11 => 11,
            ModulusKind::Mod10 | ModulusKind::DoubleAlternate => 10,
        }
    }
}

impl FromStr for ModulusKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "MOD10" => Ok(ModulusKind::Mod10),
            "MOD11" => Ok(ModulusKind::Mod11),
            "DBLAL" => Ok(ModulusKind::DoubleAlternate),
            _ => Err(format!(
                "unknown modulus kind '{}' (expected MOD10, MOD11 or DBLAL)",
                s
            )),
        }
    }
}

impl fmt::Display for ModulusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModulusKind::Mod10 => write!(f, "MOD10"),
            ModulusKind::Mod11 => write!(f, "MOD11"),
            ModulusKind::DoubleAlternate => write!(f, "DBLAL"),
        }
    }
}

/// One row of the weight table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightRecord {
    /// Inclusive lower bound of the sort code range
    pub start: u32,
    /// Inclusive upper bound of the sort code range
    pub end: u32,
    pub modulus: ModulusKind,
    /// Weights for positions u v w x y z a b c d e f g h
    pub weights: [i32; WEIGHT_COUNT],
    pub exception: Option<Exception>,
}

impl WeightRecord {
    /// Whether this record's range covers `sort_code`
    pub fn contains(&self, sort_code: u32) -> bool {
        sort_code >= self.start && sort_code <= self.end
    }

    /// Parse one whitespace separated table line
    fn parse_line(line: &str) -> std::result::Result<Self, String> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() != 17 && fields.len() != 18 {
            return Err(format!("expected 17 or 18 fields, found {}", fields.len()));
        }

        let start = parse_sort_code(fields[0])?;
        let end = parse_sort_code(fields[1])?;
        let modulus = fields[2].parse::<ModulusKind>()?;

        let mut weights = [0i32; WEIGHT_COUNT];
        for (slot, field) in weights.iter_mut().zip(&fields[3..17]) {
            *slot = field
                .parse::<i32>()
                .map_err(|_| format!("invalid weight '{}'", field))?;
        }

        let exception = match fields.get(17) {
            Some(field) => {
                let code = field
                    .parse::<u8>()
                    .map_err(|_| format!("invalid exception code '{}'", field))?;
                Exception::from_code(code)
                    .ok_or_else(|| format!("exception code {} is outside 1-14", code))?
            }
            None => None,
        };

        Ok(WeightRecord {
            start,
            end,
            modulus,
            weights,
            exception,
        })
    }
}

impl fmt::Display for WeightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}-{:06} {}", self.start, self.end, self.modulus)?;
        for weight in &self.weights {
            write!(f, " {:>3}", weight)?;
        }
        if let Some(exception) = self.exception {
            write!(f, " ex{}", exception)?;
        }
        Ok(())
    }
}

/// Ordered, immutable collection of weight records
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    records: Vec<WeightRecord>,
}

impl WeightTable {
    /// Build a table from already-parsed records.
    ///
    /// Records must be in ascending `start` order and every range must be
    /// non-empty.
    pub fn from_records(records: Vec<WeightRecord>) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            if record.start > record.end {
                return Err(ModCheckError::InvalidTable {
                    table: TABLE_NAME,
                    message: format!(
                        "record {} has range {:06}-{:06} with start after end",
                        index + 1,
                        record.start,
                        record.end
                    ),
                });
            }
        }

        if let Some(index) = records.windows(2).position(|w| w[0].start > w[1].start) {
            return Err(ModCheckError::InvalidTable {
                table: TABLE_NAME,
                message: format!(
                    "record {} starts at {:06}, before the preceding record's {:06}",
                    index + 2,
                    records[index + 1].start,
                    records[index].start
                ),
            });
        }

        Ok(WeightTable { records })
    }

    /// Parse the valacdos text format
    pub fn parse(content: &str) -> Result<Self> {
        let mut records = Vec::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record = WeightRecord::parse_line(line).map_err(|message| {
                ModCheckError::TableParse {
                    table: TABLE_NAME,
                    line: index + 1,
                    message,
                }
            })?;
            records.push(record);
        }

        Self::from_records(records)
    }

    /// Load a table in valacdos format from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ModCheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&content)?;
        log::warn!(
            "using weight table from {} ({} records) instead of the embedded table",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// The embedded published table, parsed once per process
    pub fn standard() -> &'static WeightTable {
        static STANDARD: OnceLock<WeightTable> = OnceLock::new();
        STANDARD.get_or_init(|| match Self::parse(VALACDOS) {
            Ok(table) => table,
            Err(e) => unreachable!("embedded weight table is malformed: {}", e),
        })
    }

    /// All records in table order
    pub fn records(&self) -> &[WeightRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse a six-digit sort code column
fn parse_sort_code(field: &str) -> std::result::Result<u32, String> {
    if field.len() != 6 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid sort code '{}'", field));
    }
    field
        .parse::<u32>()
        .map_err(|_| format!("invalid sort code '{}'", field))
}

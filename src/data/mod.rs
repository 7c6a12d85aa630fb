//! Reference data for uk-modcheck
//!
//! Contains the modulus weight table, the sort code substitution table and the
//! exception codes that tie records to special-case rules.

pub mod exception;
pub mod substitutes;
pub mod weights;

pub use exception::Exception;
pub use substitutes::{SubstitutionEntry, SubstitutionTable};
pub use weights::{ModulusKind, WeightRecord, WeightTable, WEIGHT_COUNT};

//! copd-core
//!
//! Pure domain types for the COPD assessment wizard: the patient record,
//! the closed field vocabulary, numeric parsing, and derived-value types.
//! No scoring logic lives here; this is the shared vocabulary of the system.

pub mod derived;
pub mod error;
pub mod fields;
pub mod numeric;
pub mod record;

pub use derived::{DerivedState, RiskGroup, SeverityGrade};
pub use error::CoreError;
pub use fields::{CatItem, FieldKey, FieldUpdate, RiskFactor, Symptom};
pub use numeric::ParsedNumeric;
pub use record::{create_initial_record, update_field, PatientRecord};

pub mod casing;
pub mod error;
pub mod field;
pub mod options;

pub use casing::CaseStrategy;
pub use error::UnsupportedCaseError;
pub use field::{FieldRecord, RecordType, ScalarType};
pub use options::GenerateOptions;

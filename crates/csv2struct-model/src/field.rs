//! Field records and the assembled record type fed to the emitter.

use serde::{Deserialize, Serialize};

/// Scalar type assigned to a column from a single sampled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    Int64,
    Bool,
    String,
    Float64,
}

impl ScalarType {
    /// Rust spelling used in emitted code.
    pub fn rust_name(self) -> &'static str {
        match self {
            ScalarType::Int64 => "i64",
            ScalarType::Bool => "bool",
            ScalarType::String => "String",
            ScalarType::Float64 => "f64",
        }
    }
}

/// One column of the generated struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Header exactly as it appeared in the CSV; becomes the serde rename tag.
    pub original_header: String,
    /// Identifier-safe field name produced by the normalizer.
    pub name: String,
    /// Scalar type inferred from the sampled value.
    pub scalar_type: ScalarType,
}

/// Everything the emitter needs to render one struct declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordType {
    /// Name of the enclosing package, or the fallback placeholder.
    pub package_name: String,
    /// Name of the emitted struct. May be empty; passed through unchanged.
    pub type_name: String,
    /// Whether the emitted text names its enclosing package.
    pub include_package_header: bool,
    /// Per-column fields in source header order.
    pub fields: Vec<FieldRecord>,
}

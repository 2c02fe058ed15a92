//! Core csv2struct pipeline.
//!
//! Turns a sampled CSV (header row plus one data row) into Rust struct
//! source text in five stages:
//!
//! 1. **Sample**: read the first two records of the delimited stream
//! 2. **Infer**: classify each sampled value as a scalar type
//! 3. **Normalize**: convert raw headers into identifier-safe field names
//! 4. **Assemble**: zip headers, names and types into field records
//! 5. **Emit**: render the assembled record type as source text
//!
//! ## Example
//!
//! ```
//! use csv2struct_mapper::generate;
//! use csv2struct_model::{CaseStrategy, GenerateOptions};
//!
//! let csv = "name,age\nivan,34";
//! let options = GenerateOptions {
//!     type_name: "Person".to_string(),
//!     strategy: CaseStrategy::Camel,
//!     include_package_header: false,
//! };
//! let source = generate(csv.as_bytes(), b',', &options, || None).unwrap();
//! assert!(source.contains("pub Name: String"));
//! assert!(source.contains("pub Age: i64"));
//! ```

pub mod assemble;
pub mod emit;
pub mod error;
pub mod infer;
pub mod normalize;
pub mod sample;

pub use assemble::{PLACEHOLDER_PACKAGE_NAME, assemble_record_type};
pub use emit::render_record_type;
pub use error::{MapperError, Result};
pub use infer::infer_types;
pub use normalize::{normalize_header, normalize_headers};
pub use sample::{SampledRow, sample_file, sample_reader};

use std::io::Read;

use tracing::debug;

use csv2struct_model::GenerateOptions;

/// Run the full pipeline over a delimited stream and return the rendered text.
///
/// `resolve_package` is called exactly once to discover the enclosing package
/// name; `None` falls back to a fixed placeholder during assembly.
pub fn generate<R, F>(
    reader: R,
    delimiter: u8,
    options: &GenerateOptions,
    resolve_package: F,
) -> Result<String>
where
    R: Read,
    F: FnOnce() -> Option<String>,
{
    let sampled = sample_reader(reader, delimiter)?;
    let names = normalize_headers(&sampled.headers, options.strategy);
    let types = infer_types(&sampled.values);
    let record = assemble_record_type(&sampled.headers, &names, &types, resolve_package(), options)?;
    debug!(fields = ?record.fields, "assembled record fields");
    render_record_type(&record)
}

//! Field assembly: zip headers, normalized names and inferred types.

use csv2struct_model::{FieldRecord, GenerateOptions, RecordType, ScalarType};

use crate::error::{MapperError, Result};

/// Substituted when package resolution yields nothing.
pub const PLACEHOLDER_PACKAGE_NAME: &str = "placeholder_package_name";

/// Build the record type from the three parallel per-column sequences.
///
/// The counts are checked loosely: the normalized names must line up with
/// either the inferred types or the original headers. A shorter or absent
/// value row is tolerated as long as the header-derived counts agree; fields
/// are zipped by index, so the result is bounded by the shortest sequence.
pub fn assemble_record_type(
    headers: &[String],
    names: &[String],
    types: &[ScalarType],
    package_name: Option<String>,
    options: &GenerateOptions,
) -> Result<RecordType> {
    if names.len() != types.len() && names.len() != headers.len() {
        return Err(MapperError::ColumnCountMismatch {
            names: names.len(),
            types: types.len(),
        });
    }
    let fields: Vec<FieldRecord> = headers
        .iter()
        .zip(names)
        .zip(types)
        .map(|((header, name), &scalar_type)| FieldRecord {
            original_header: header.clone(),
            name: name.clone(),
            scalar_type,
        })
        .collect();
    Ok(RecordType {
        package_name: package_name.unwrap_or_else(|| PLACEHOLDER_PACKAGE_NAME.to_string()),
        // An empty type name passes through unchanged.
        type_name: options.type_name.clone(),
        include_package_header: options.include_package_header,
        fields,
    })
}

//! Source text emission for an assembled record type.

use std::fmt::Write;

use csv2struct_model::RecordType;

use crate::error::Result;

/// Render the record type as Rust struct source text.
///
/// The output shape is fixed: an optional generated-file header naming the
/// enclosing package, the serde import, and one public field per record
/// carrying a `#[serde(rename = "...")]` attribute with the original header.
/// The struct allows non-snake-case names since every casing strategy
/// produces title-cased fields.
pub fn render_record_type(record: &RecordType) -> Result<String> {
    let mut out = String::new();
    if record.include_package_header {
        writeln!(
            out,
            "//! Generated by csv2struct for package `{}`.",
            record.package_name
        )?;
        writeln!(out)?;
    }
    writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
    writeln!(out)?;
    writeln!(out, "#[derive(Debug, Clone, Serialize, Deserialize)]")?;
    writeln!(out, "#[allow(non_snake_case)]")?;
    writeln!(out, "pub struct {} {{", record.type_name)?;
    for field in &record.fields {
        writeln!(out, "    #[serde(rename = \"{}\")]", field.original_header)?;
        writeln!(
            out,
            "    pub {}: {},",
            field.name,
            field.scalar_type.rust_name()
        )?;
    }
    writeln!(out, "}}")?;
    Ok(out)
}

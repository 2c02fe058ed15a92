use std::path::PathBuf;

use csv2struct_model::FieldRecord;

/// Outcome of one generate run, used for the summary display.
#[derive(Debug)]
pub struct GenerateResult {
    pub type_name: String,
    pub package_name: String,
    pub destination: PathBuf,
    pub fields: Vec<FieldRecord>,
    pub formatted: bool,
    pub dry_run: bool,
}

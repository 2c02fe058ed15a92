//! CSV sampling: the first record as headers, the second as values.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;

/// Header row and first data row of a delimited stream.
///
/// Both sequences are positionally aligned by column index. Either may be
/// empty when the stream ends early; lengths are not required to match here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledRow {
    pub headers: Vec<String>,
    pub values: Vec<String>,
}

/// Sample a CSV file on disk.
pub fn sample_file(path: &Path, delimiter: u8) -> Result<SampledRow> {
    let reader = builder(delimiter).from_path(path)?;
    sample(reader)
}

/// Sample any delimited stream.
pub fn sample_reader<R: Read>(reader: R, delimiter: u8) -> Result<SampledRow> {
    sample(builder(delimiter).from_reader(reader))
}

fn builder(delimiter: u8) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter);
    builder
}

fn sample<R: Read>(reader: csv::Reader<R>) -> Result<SampledRow> {
    let mut records = reader.into_records();
    let headers = next_record(&mut records)?;
    let values = next_record(&mut records)?;
    Ok(SampledRow { headers, values })
}

/// End-of-stream yields an empty record rather than an error.
fn next_record<R: Read>(records: &mut csv::StringRecordsIntoIter<R>) -> Result<Vec<String>> {
    match records.next() {
        Some(record) => Ok(record?
            .iter()
            .map(|field| field.trim_start().to_string())
            .collect()),
        None => Ok(Vec::new()),
    }
}

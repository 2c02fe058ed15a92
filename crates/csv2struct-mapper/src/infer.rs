//! Scalar type inference from a single sampled value per column.

use csv2struct_model::ScalarType;

/// Classify every sampled value, preserving order.
///
/// Inference sees one value per column, so it is inherently approximate:
/// a column whose first row happens to hold `12` is typed `Int64` even if
/// later rows hold text.
pub fn infer_types(values: &[String]) -> Vec<ScalarType> {
    values.iter().map(|value| infer_type(value)).collect()
}

/// Strict precedence, first match wins: bool, i64, f64, then String.
///
/// The order matters: integer-looking values must not classify as floats,
/// and the boolean literals must not classify as strings. Only the exact
/// `true`/`false` spellings count as booleans.
fn infer_type(value: &str) -> ScalarType {
    if value.parse::<bool>().is_ok() {
        return ScalarType::Bool;
    }
    if value.parse::<i64>().is_ok() {
        return ScalarType::Int64;
    }
    if value.parse::<f64>().is_ok() {
        return ScalarType::Float64;
    }
    ScalarType::String
}

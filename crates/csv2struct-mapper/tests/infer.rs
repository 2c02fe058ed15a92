//! Integration tests for scalar type inference.

use csv2struct_mapper::infer_types;
use csv2struct_model::ScalarType;

fn values(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn classifies_mixed_values() {
    let types = infer_types(&values(&["12.3", "12", "true", "false", "blah"]));
    assert_eq!(
        types,
        vec![
            ScalarType::Float64,
            ScalarType::Int64,
            ScalarType::Bool,
            ScalarType::Bool,
            ScalarType::String,
        ]
    );
}

#[test]
fn falls_back_to_string_for_unparseable_values() {
    let types = infer_types(&values(&[
        "112381723^12312&",
        "2021-02-06",
        "999111aaa",
        "????",
        "false1",
    ]));
    assert!(types.iter().all(|ty| *ty == ScalarType::String));
}

#[test]
fn integers_are_never_classified_as_floats() {
    assert_eq!(infer_types(&values(&["12"])), vec![ScalarType::Int64]);
    assert_eq!(infer_types(&values(&["-7"])), vec![ScalarType::Int64]);
}

#[test]
fn boolean_literals_are_never_classified_as_strings() {
    assert_eq!(infer_types(&values(&["true"])), vec![ScalarType::Bool]);
    assert_eq!(infer_types(&values(&["false"])), vec![ScalarType::Bool]);
}

#[test]
fn boolean_parsing_is_case_sensitive() {
    let types = infer_types(&values(&["True", "FALSE", "t"]));
    assert!(types.iter().all(|ty| *ty == ScalarType::String));
}

#[test]
fn values_outside_the_i64_range_become_floats() {
    // One past i64::MAX still parses as f64.
    let types = infer_types(&values(&["9223372036854775808"]));
    assert_eq!(types, vec![ScalarType::Float64]);
}

#[test]
fn empty_input_yields_no_types() {
    assert!(infer_types(&[]).is_empty());
}

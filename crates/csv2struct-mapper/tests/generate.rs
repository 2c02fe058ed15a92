//! Integration tests for assembly, emission and the full pipeline.

use csv2struct_mapper::{
    MapperError, PLACEHOLDER_PACKAGE_NAME, assemble_record_type, generate, render_record_type,
};
use csv2struct_model::{CaseStrategy, FieldRecord, GenerateOptions, RecordType, ScalarType};

fn options(type_name: &str) -> GenerateOptions {
    GenerateOptions {
        type_name: type_name.to_string(),
        strategy: CaseStrategy::Camel,
        include_package_header: true,
    }
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn assembles_fields_in_header_order() {
    let record = assemble_record_type(
        &strings(&["first name", "age"]),
        &strings(&["FirstName", "Age"]),
        &[ScalarType::String, ScalarType::Int64],
        Some("demo".to_string()),
        &options("Person"),
    )
    .unwrap();
    assert_eq!(record.package_name, "demo");
    assert_eq!(record.type_name, "Person");
    assert_eq!(
        record.fields,
        vec![
            FieldRecord {
                original_header: "first name".to_string(),
                name: "FirstName".to_string(),
                scalar_type: ScalarType::String,
            },
            FieldRecord {
                original_header: "age".to_string(),
                name: "Age".to_string(),
                scalar_type: ScalarType::Int64,
            },
        ]
    );
}

#[test]
fn irreconcilable_counts_fail_with_both_counts_named() {
    let error = assemble_record_type(
        &strings(&["a", "b", "c"]),
        &strings(&["A", "B"]),
        &[ScalarType::String],
        None,
        &options("Broken"),
    )
    .unwrap_err();
    assert!(matches!(
        error,
        MapperError::ColumnCountMismatch { names: 2, types: 1 }
    ));
    assert_eq!(
        error.to_string(),
        "got 2 normalized headers and 1 inferred types, not matching"
    );
}

#[test]
fn shorter_value_row_is_tolerated_when_header_counts_agree() {
    let record = assemble_record_type(
        &strings(&["a", "b", "c"]),
        &strings(&["A", "B", "C"]),
        &[ScalarType::Int64, ScalarType::Bool],
        None,
        &options("Partial"),
    )
    .unwrap();
    // Zipped by index: bounded by the shortest sequence.
    assert_eq!(record.fields.len(), 2);
}

#[test]
fn absent_value_row_yields_an_empty_field_list() {
    let record = assemble_record_type(
        &strings(&["a", "b"]),
        &strings(&["A", "B"]),
        &[],
        None,
        &options("Empty"),
    )
    .unwrap();
    assert!(record.fields.is_empty());
}

#[test]
fn missing_package_falls_back_to_the_placeholder() {
    let record =
        assemble_record_type(&strings(&[]), &strings(&[]), &[], None, &options("T")).unwrap();
    assert_eq!(record.package_name, PLACEHOLDER_PACKAGE_NAME);
}

#[test]
fn empty_type_name_passes_through_unchanged() {
    let record =
        assemble_record_type(&strings(&[]), &strings(&[]), &[], None, &options("")).unwrap();
    assert_eq!(record.type_name, "");
    let rendered = render_record_type(&record).unwrap();
    assert!(rendered.contains("pub struct  {"));
}

#[test]
fn renders_the_fixed_output_shape() {
    let record = RecordType {
        package_name: "demo_core".to_string(),
        type_name: "Person".to_string(),
        include_package_header: true,
        fields: vec![
            FieldRecord {
                original_header: "name".to_string(),
                name: "Name".to_string(),
                scalar_type: ScalarType::String,
            },
            FieldRecord {
                original_header: "age".to_string(),
                name: "Age".to_string(),
                scalar_type: ScalarType::Int64,
            },
        ],
    };
    let rendered = render_record_type(&record).unwrap();
    insta::assert_snapshot!(rendered, @r#"
//! Generated by csv2struct for package `demo_core`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct Person {
    #[serde(rename = "name")]
    pub Name: String,
    #[serde(rename = "age")]
    pub Age: i64,
}
"#);
}

#[test]
fn omits_the_package_header_when_disabled() {
    let record = RecordType {
        package_name: "demo_core".to_string(),
        type_name: "Bare".to_string(),
        include_package_header: false,
        fields: vec![],
    };
    let rendered = render_record_type(&record).unwrap();
    assert!(rendered.starts_with("use serde::"));
    assert!(!rendered.contains("demo_core"));
}

#[test]
fn generates_source_from_a_delimited_stream() {
    let csv = "registered_at,score,is admin\n2021-02-06,12.5,true";
    let generate_options = GenerateOptions {
        type_name: "Account".to_string(),
        strategy: CaseStrategy::Snake,
        include_package_header: true,
    };
    let source = generate(csv.as_bytes(), b',', &generate_options, || {
        Some("accounts".to_string())
    })
    .unwrap();
    assert!(source.contains("//! Generated by csv2struct for package `accounts`."));
    assert!(source.contains("pub struct Account {"));
    assert!(source.contains("#[serde(rename = \"registered_at\")]"));
    assert!(source.contains("pub RegisteredAt: String,"));
    assert!(source.contains("pub Score: f64,"));
    // Space headers under the snake strategy stay one word.
    assert!(source.contains("#[serde(rename = \"is admin\")]"));
    assert!(source.contains("pub Isadmin: bool,"));
}

#[test]
fn generate_substitutes_the_placeholder_package() {
    let source = generate(
        "a\n1".as_bytes(),
        b',',
        &options("Row"),
        || None,
    )
    .unwrap();
    assert!(source.contains(PLACEHOLDER_PACKAGE_NAME));
}

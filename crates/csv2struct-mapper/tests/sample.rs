//! Integration tests for CSV sampling.

use std::fs;

use csv2struct_mapper::{MapperError, sample_file, sample_reader};

#[test]
fn samples_comma_separated_records() {
    let csv = "name,nickname,blah\nivan,koshqua,blah";
    let sampled = sample_reader(csv.as_bytes(), b',').unwrap();
    assert_eq!(sampled.headers, vec!["name", "nickname", "blah"]);
    assert_eq!(sampled.values, vec!["ivan", "koshqua", "blah"]);
}

#[test]
fn samples_pipe_separated_records() {
    let csv = "name|nickname|blah\nivan|koshqua|blah";
    let sampled = sample_reader(csv.as_bytes(), b'|').unwrap();
    assert_eq!(sampled.headers, vec!["name", "nickname", "blah"]);
    assert_eq!(sampled.values, vec!["ivan", "koshqua", "blah"]);
}

#[test]
fn trims_leading_whitespace_per_field() {
    let csv = "name,  nickname\nivan,   koshqua";
    let sampled = sample_reader(csv.as_bytes(), b',').unwrap();
    assert_eq!(sampled.headers, vec!["name", "nickname"]);
    assert_eq!(sampled.values, vec!["ivan", "koshqua"]);
}

#[test]
fn header_only_stream_yields_empty_values() {
    let sampled = sample_reader("name,nickname".as_bytes(), b',').unwrap();
    assert_eq!(sampled.headers, vec!["name", "nickname"]);
    assert!(sampled.values.is_empty());
}

#[test]
fn empty_stream_yields_empty_sample() {
    let sampled = sample_reader("".as_bytes(), b',').unwrap();
    assert!(sampled.headers.is_empty());
    assert!(sampled.values.is_empty());
}

#[test]
fn tolerates_mismatched_column_counts() {
    let csv = "a,b,c\n1,2";
    let sampled = sample_reader(csv.as_bytes(), b',').unwrap();
    assert_eq!(sampled.headers.len(), 3);
    assert_eq!(sampled.values.len(), 2);
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let bytes: &[u8] = b"name,\xff\xfe\nivan,x";
    let error = sample_reader(bytes, b',').unwrap_err();
    assert!(matches!(error, MapperError::Read(_)));
}

#[test]
fn samples_from_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, "name;age\nivan;34\nmaria;28\n").unwrap();
    let sampled = sample_file(&path, b';').unwrap();
    assert_eq!(sampled.headers, vec!["name", "age"]);
    // Only the first data row is sampled.
    assert_eq!(sampled.values, vec!["ivan", "34"]);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = sample_file(&dir.path().join("absent.csv"), b',').unwrap_err();
    assert!(matches!(error, MapperError::Read(_)));
}

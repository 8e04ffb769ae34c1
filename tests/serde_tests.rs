#![cfg(feature = "serde")]

//! Integration tests for serde support in hashset-algebra.
//!
//! These tests verify that sets serialize as JSON arrays and deserialize
//! back with set semantics.

use hashset_algebra::{Set, sorted_items};
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[rstest]
fn test_set_json_roundtrip() {
    let set: Set<i32> = (1..=10).collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: Set<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_set_serializes_as_array() {
    let set = Set::from_items(["only".to_string()]);
    assert_eq!(serde_json::to_string(&set).unwrap(), r#"["only"]"#);
}

#[rstest]
fn test_deserialize_collapses_duplicates() {
    let restored: Set<u8> = serde_json::from_str("[3, 1, 3, 2, 1]").unwrap();
    assert_eq!(sorted_items(&restored), vec![1, 2, 3]);
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<Set<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Document {
    title: String,
    tags: Set<String>,
}

#[rstest]
fn test_set_nested_in_struct() {
    let document = Document {
        title: "notes".to_string(),
        tags: Set::from_items(["rust".to_string(), "sets".to_string()]),
    };

    let json = serde_json::to_string(&document).unwrap();
    let restored: Document = serde_json::from_str(&json).unwrap();

    assert_eq!(document, restored);
}

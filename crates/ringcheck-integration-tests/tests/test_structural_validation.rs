//! # Structural Validation Tests
//!
//! Malformed structure definitions must be rejected at construction with
//! the offending cell, dimension, or label named — never coerced, defaulted,
//! or half-built.

use ringcheck_core::{InvalidTableError, OperationKind, TableModel};
use ringcheck_schema::{DocumentError, StructureDocument};

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn out_of_alphabet_cell_is_rejected_with_position() {
    let err = TableModel::build(
        ["A", "B", "C"],
        &grid(&[&["A", "B", "C"], &["B", "C", "A"], &["C", "A", "B"]]),
        &grid(&[&["A", "A", "A"], &["A", "Z", "C"], &["A", "C", "B"]]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        InvalidTableError::UnknownEntry {
            op: OperationKind::Multiplication,
            row: 1,
            col: 1,
            label: "Z".to_string(),
        }
    );
    let message = format!("{err}");
    assert!(message.contains("multiplication"));
    assert!(message.contains("(1, 1)"));
}

#[test]
fn dimension_mismatches_name_the_operation() {
    let err = TableModel::build(
        ["A", "B"],
        &grid(&[&["A", "B"], &["B", "A"]]),
        &grid(&[&["A", "A"], &["A", "B"], &["B", "A"]]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        InvalidTableError::RowCountMismatch {
            op: OperationKind::Multiplication,
            rows: 3,
            expected: 2,
        }
    );
}

#[test]
fn duplicate_labels_are_rejected() {
    let err = TableModel::build(
        ["A", "B", "B"],
        &grid(&[&["A", "B", "A"], &["B", "A", "B"], &["A", "B", "A"]]),
        &grid(&[&["A", "A", "A"], &["A", "B", "A"], &["A", "A", "A"]]),
    )
    .unwrap_err();
    assert!(matches!(err, InvalidTableError::DuplicateElement { .. }));
}

#[test]
fn empty_structure_is_rejected() {
    let err = TableModel::build(Vec::<String>::new(), &[], &[]).unwrap_err();
    assert_eq!(err, InvalidTableError::EmptyElementSet);
}

#[test]
fn document_size_mismatch_is_rejected_before_core_validation() {
    let document = StructureDocument {
        name: None,
        size: Some(3),
        elements: Some(vec!["A".to_string(), "B".to_string()]),
        addition_table: grid(&[&["A", "B"], &["B", "A"]]),
        multiplication_table: grid(&[&["A", "A"], &["A", "B"]]),
    };
    assert!(matches!(
        document.to_model().unwrap_err(),
        DocumentError::SizeMismatch {
            declared: 3,
            found: 2
        }
    ));
}

#[test]
fn document_with_unknown_entry_propagates_the_core_error() {
    let document = StructureDocument::from_json(
        r#"{
            "elements": ["A", "B", "C"],
            "addition_table": [["A","B","C"],["B","C","A"],["C","A","QQ"]],
            "multiplication_table": [["A","A","A"],["A","B","C"],["A","C","B"]]
        }"#,
    )
    .unwrap();
    let err = document.to_model().unwrap_err();
    assert!(matches!(
        err,
        DocumentError::InvalidTable(InvalidTableError::UnknownEntry { .. })
    ));
    assert!(format!("{err}").contains("\"QQ\""));
}

#[test]
fn defensive_lookup_outside_the_set_errors() {
    let model = TableModel::build(
        ["A", "B"],
        &grid(&[&["A", "B"], &["B", "A"]]),
        &grid(&[&["A", "A"], &["A", "B"]]),
    )
    .unwrap();
    let err = model
        .apply(OperationKind::Multiplication, "A", "E")
        .unwrap_err();
    assert_eq!(err.label, "E");
}

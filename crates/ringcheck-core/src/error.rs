//! # Structural Error Types
//!
//! Errors raised while building a [`TableModel`](crate::TableModel). Every
//! variant names the offending label, cell, or dimension so a caller can
//! point the user at the exact problem. Uses `thiserror` for ergonomic error
//! definitions with diagnostic context.
//!
//! Structural errors are construction-time only: once a model exists, table
//! lookups over its own elements cannot fail.

use thiserror::Error;

use crate::table::OperationKind;

/// A structure definition that cannot be turned into a table model.
///
/// Raised once, at construction. The first violation encountered aborts the
/// build; nothing is repaired silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidTableError {
    /// The element set has no members.
    #[error("element set is empty: a structure needs at least one element")]
    EmptyElementSet,

    /// An element label is empty or contains whitespace.
    #[error("invalid element label {label:?}: labels must be non-empty and contain no whitespace")]
    InvalidLabel { label: String },

    /// The same label appears twice in the element sequence.
    #[error("duplicate element label {label:?} at position {position}")]
    DuplicateElement { label: String, position: usize },

    /// A grid has the wrong number of rows for the element count.
    #[error("{op} table has {rows} rows, expected {expected}")]
    RowCountMismatch {
        op: OperationKind,
        rows: usize,
        expected: usize,
    },

    /// A grid row has the wrong number of entries.
    #[error("{op} table row {row} has {len} entries, expected {expected}")]
    RowLengthMismatch {
        op: OperationKind,
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A grid cell references a label outside the element set.
    #[error("{op} table cell ({row}, {col}) holds {label:?}, which is not in the element set")]
    UnknownEntry {
        op: OperationKind,
        row: usize,
        col: usize,
        label: String,
    },
}

/// A label-level lookup named an element outside the declared set.
///
/// Defensive only: values produced by a model are always members of its own
/// element set, so this can surface only when a caller passes in labels from
/// somewhere else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown element {label:?}: not a member of the declared element set")]
pub struct UnknownElementError {
    /// The label that failed to resolve.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_element_set_display() {
        let err = InvalidTableError::EmptyElementSet;
        assert!(format!("{err}").contains("at least one element"));
    }

    #[test]
    fn invalid_label_display() {
        let err = InvalidTableError::InvalidLabel {
            label: "a b".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("a b"));
        assert!(msg.contains("whitespace"));
    }

    #[test]
    fn duplicate_element_display() {
        let err = InvalidTableError::DuplicateElement {
            label: "B".to_string(),
            position: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("\"B\""));
        assert!(msg.contains('2'));
    }

    #[test]
    fn row_count_mismatch_display() {
        let err = InvalidTableError::RowCountMismatch {
            op: OperationKind::Addition,
            rows: 2,
            expected: 3,
        };
        let msg = format!("{err}");
        assert!(msg.contains("addition"));
        assert!(msg.contains("2 rows"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn unknown_entry_names_the_cell() {
        let err = InvalidTableError::UnknownEntry {
            op: OperationKind::Multiplication,
            row: 1,
            col: 2,
            label: "Q".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("multiplication"));
        assert!(msg.contains("(1, 2)"));
        assert!(msg.contains("\"Q\""));
    }

    #[test]
    fn unknown_element_display() {
        let err = UnknownElementError {
            label: "X".to_string(),
        };
        assert!(format!("{err}").contains("\"X\""));
    }
}

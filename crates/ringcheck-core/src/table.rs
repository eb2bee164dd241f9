//! # Operation Tables & the Table Model
//!
//! An [`OperationTable`] is a total function `(Element, Element) → Element`
//! stored as an n×n grid of element *indices*. Resolving every cell against
//! the element set at construction time makes closure a structural
//! invariant: a built table cannot produce a value outside the set, so
//! lookups during analysis are plain index arithmetic and cannot fail.
//!
//! [`TableModel`] bundles the element set with its addition and
//! multiplication tables behind one validating constructor.

use serde::{Deserialize, Serialize};

use crate::element::{ElementLabel, ElementSet};
use crate::error::{InvalidTableError, UnknownElementError};

// ---------------------------------------------------------------------------
// OperationKind
// ---------------------------------------------------------------------------

/// Which of the two binary operations a table or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// The additive operation of the structure.
    Addition,
    /// The multiplicative operation of the structure.
    Multiplication,
}

impl OperationKind {
    /// Conventional infix symbol, for rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Multiplication => "·",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Addition => write!(f, "addition"),
            Self::Multiplication => write!(f, "multiplication"),
        }
    }
}

// ---------------------------------------------------------------------------
// OperationTable
// ---------------------------------------------------------------------------

/// A total binary operation over an element set, as a dense n×n grid.
///
/// Cells hold indices into the owning [`ElementSet`]; row `x`, column `y`
/// holds `x ∘ y`. Construction resolves every label against the set, so
/// every stored index is in range (closure by construction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationTable {
    size: usize,
    cells: Vec<usize>,
}

impl OperationTable {
    /// Resolve a label grid against the element set.
    ///
    /// # Errors
    ///
    /// Dimension mismatches name the operation and offending row;
    /// out-of-alphabet entries name the operation, cell, and label.
    pub(crate) fn from_grid(
        op: OperationKind,
        elements: &ElementSet,
        grid: &[Vec<String>],
    ) -> Result<Self, InvalidTableError> {
        let n = elements.len();
        if grid.len() != n {
            return Err(InvalidTableError::RowCountMismatch {
                op,
                rows: grid.len(),
                expected: n,
            });
        }
        let mut cells = Vec::with_capacity(n * n);
        for (row, entries) in grid.iter().enumerate() {
            if entries.len() != n {
                return Err(InvalidTableError::RowLengthMismatch {
                    op,
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            for (col, entry) in entries.iter().enumerate() {
                let index = elements.index_of(entry.trim()).ok_or_else(|| {
                    InvalidTableError::UnknownEntry {
                        op,
                        row,
                        col,
                        label: entry.clone(),
                    }
                })?;
                cells.push(index);
            }
        }
        Ok(Self { size: n, cells })
    }

    /// Grid dimension n.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index-level lookup: the index of `x ∘ y`.
    ///
    /// Constant-time. Callers pass indices obtained from the owning element
    /// set (or from previous lookups), which are in range by construction.
    pub fn lookup(&self, x: usize, y: usize) -> usize {
        self.cells[x * self.size + y]
    }
}

// ---------------------------------------------------------------------------
// TableModel
// ---------------------------------------------------------------------------

/// A finite element set together with its two operation tables.
///
/// The only constructor validates everything up front; afterwards the model
/// is a purely immutable lookup structure with no side effects. Analysis
/// consumes it read-only and may do so from any thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    elements: ElementSet,
    addition: OperationTable,
    multiplication: OperationTable,
}

impl TableModel {
    /// Build a model from element labels and two n×n label grids.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTableError`] for an empty or duplicated element
    /// sequence, a grid whose dimensions do not match the element count, or
    /// a cell referencing a label outside the set. The first violation
    /// aborts the build; no partial model is returned.
    pub fn build<I, S>(
        labels: I,
        addition: &[Vec<String>],
        multiplication: &[Vec<String>],
    ) -> Result<Self, InvalidTableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_element_set(ElementSet::from_labels(labels)?, addition, multiplication)
    }

    /// Build a model from an already-constructed element set.
    ///
    /// # Errors
    ///
    /// Same grid validation as [`TableModel::build`].
    pub fn from_element_set(
        elements: ElementSet,
        addition: &[Vec<String>],
        multiplication: &[Vec<String>],
    ) -> Result<Self, InvalidTableError> {
        let addition = OperationTable::from_grid(OperationKind::Addition, &elements, addition)?;
        let multiplication =
            OperationTable::from_grid(OperationKind::Multiplication, &elements, multiplication)?;
        Ok(Self {
            elements,
            addition,
            multiplication,
        })
    }

    /// The element set the tables are defined over.
    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    /// Number of elements n.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// The table for one of the two operations.
    pub fn table(&self, op: OperationKind) -> &OperationTable {
        match op {
            OperationKind::Addition => &self.addition,
            OperationKind::Multiplication => &self.multiplication,
        }
    }

    /// Label-level lookup: `x ∘ y` by element labels.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownElementError`] if either label is not a member of
    /// the element set. Unreachable for labels taken from the model itself —
    /// the closure invariant keeps every table value inside the set.
    pub fn apply(
        &self,
        op: OperationKind,
        x: &str,
        y: &str,
    ) -> Result<&ElementLabel, UnknownElementError> {
        let xi = self.resolve(x)?;
        let yi = self.resolve(y)?;
        Ok(&self.elements.labels()[self.table(op).lookup(xi, yi)])
    }

    /// Index-level lookup used by the analyzer's scans. Infallible for
    /// indices below [`TableModel::size`].
    pub fn apply_idx(&self, op: OperationKind, x: usize, y: usize) -> usize {
        self.table(op).lookup(x, y)
    }

    /// The label at a given element index.
    pub fn label(&self, index: usize) -> &ElementLabel {
        &self.elements.labels()[index]
    }

    /// The table for `op` re-expanded to a label grid, for export.
    pub fn grid(&self, op: OperationKind) -> Vec<Vec<String>> {
        let n = self.size();
        let table = self.table(op);
        (0..n)
            .map(|x| {
                (0..n)
                    .map(|y| self.label(table.lookup(x, y)).as_str().to_string())
                    .collect()
            })
            .collect()
    }

    fn resolve(&self, label: &str) -> Result<usize, UnknownElementError> {
        self.elements
            .index_of(label)
            .ok_or_else(|| UnknownElementError {
                label: label.to_string(),
            })
    }
}

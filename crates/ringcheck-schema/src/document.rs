//! # Structure & Report Documents
//!
//! Serde mirrors of the JSON formats callers exchange with ringcheck. A
//! [`StructureDocument`] is what an editor, an export, or a hand-written
//! file supplies; a [`ReportDocument`] is what an analysis run emits. Field
//! names are part of the format and stay stable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ringcheck_analysis::RingAnalysis;
use ringcheck_core::{ordinal_label, InvalidTableError, OperationKind, TableModel};

// ---------------------------------------------------------------------------
// Document error type
// ---------------------------------------------------------------------------

/// Errors turning text into a usable table model.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document is not well-formed JSON for this format.
    #[error("malformed structure document: {0}")]
    Json(#[from] serde_json::Error),

    /// A declared `size` disagrees with the actual grid dimension.
    #[error("declared size {declared} does not match the {found}×{found} addition table")]
    SizeMismatch { declared: usize, found: usize },

    /// The tables themselves are structurally invalid.
    #[error(transparent)]
    InvalidTable(#[from] InvalidTableError),
}

// ---------------------------------------------------------------------------
// StructureDocument
// ---------------------------------------------------------------------------

/// A finite structure definition: element labels plus the two operation
/// grids, row-major, row `x` column `y` holding `x ∘ y`.
///
/// `size` and `elements` are optional on input: the grid dimension is
/// authoritative, and omitted elements default to alphabetic labels
/// (`A`, `B`, …) matching the grid size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureDocument {
    /// Display name, e.g. the name a calculation was saved under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Declared element count. Must match the grids when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,

    /// Element labels in table order. Alphabetic when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<String>>,

    /// The addition grid.
    pub addition_table: Vec<Vec<String>>,

    /// The multiplication grid.
    pub multiplication_table: Vec<Vec<String>>,
}

impl StructureDocument {
    /// Re-export a model as a document, with every optional field filled in.
    pub fn from_model(name: Option<String>, model: &TableModel) -> Self {
        Self {
            name,
            size: Some(model.size()),
            elements: Some(
                model
                    .elements()
                    .iter()
                    .map(|label| label.as_str().to_string())
                    .collect(),
            ),
            addition_table: model.grid(OperationKind::Addition),
            multiplication_table: model.grid(OperationKind::Multiplication),
        }
    }

    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] for malformed input; the tables are
    /// not validated until [`StructureDocument::to_model`].
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Serialization of this shape cannot practically fail; the `Result`
    /// mirrors the serde_json signature.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The grid dimension, taken from the addition table.
    pub fn grid_size(&self) -> usize {
        self.addition_table.len()
    }

    /// Validate the document into a [`TableModel`].
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::SizeMismatch`] when a declared `size`
    /// disagrees with the grids, and propagates every structural error from
    /// the core constructor (wrong dimensions, unknown entries, duplicate
    /// or invalid labels).
    pub fn to_model(&self) -> Result<TableModel, DocumentError> {
        let n = self.grid_size();
        if let Some(declared) = self.size {
            if declared != n {
                return Err(DocumentError::SizeMismatch {
                    declared,
                    found: n,
                });
            }
        }
        let labels: Vec<String> = match &self.elements {
            Some(labels) => labels.clone(),
            None => (0..n).map(ordinal_label).collect(),
        };
        Ok(TableModel::build(
            labels,
            &self.addition_table,
            &self.multiplication_table,
        )?)
    }
}

// ---------------------------------------------------------------------------
// ReportDocument
// ---------------------------------------------------------------------------

/// The exported outcome of one analysis run: the analyzed structure, the
/// full verdict record, and when the report was generated.
///
/// The timestamp lives here rather than in [`RingAnalysis`] so the core
/// result stays a pure function of its input tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Display name carried over from the structure document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Element count.
    pub size: usize,

    /// Element labels in table order.
    pub elements: Vec<String>,

    /// The analyzed addition grid.
    pub addition_table: Vec<Vec<String>>,

    /// The analyzed multiplication grid.
    pub multiplication_table: Vec<Vec<String>>,

    /// The complete verdict record.
    pub analysis: RingAnalysis,

    /// When this report was generated.
    pub generated_at: DateTime<Utc>,
}

impl ReportDocument {
    /// Assemble a report for a completed run, stamped with the current time.
    pub fn new(name: Option<String>, model: &TableModel, analysis: RingAnalysis) -> Self {
        Self {
            name,
            size: model.size(),
            elements: model
                .elements()
                .iter()
                .map(|label| label.as_str().to_string())
                .collect(),
            addition_table: model.grid(OperationKind::Addition),
            multiplication_table: model.grid(OperationKind::Multiplication),
            analysis,
            generated_at: Utc::now(),
        }
    }

    /// Parse a report from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] for malformed input.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Mirrors the serde_json signature; cannot practically fail.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringcheck_analysis::{analyze, Classification};

    fn z3_document() -> StructureDocument {
        StructureDocument::from_json(
            r#"{
                "name": "Z3",
                "size": 3,
                "elements": ["A", "B", "C"],
                "addition_table": [["A","B","C"],["B","C","A"],["C","A","B"]],
                "multiplication_table": [["A","A","A"],["A","B","C"],["A","C","B"]]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn document_to_model_and_back() {
        let document = z3_document();
        let model = document.to_model().unwrap();
        assert_eq!(model.size(), 3);
        let exported = StructureDocument::from_model(document.name.clone(), &model);
        assert_eq!(exported.addition_table, document.addition_table);
        assert_eq!(exported.elements, document.elements);
        assert_eq!(exported.size, Some(3));
    }

    #[test]
    fn elements_default_to_alphabetic() {
        let document = StructureDocument::from_json(
            r#"{
                "addition_table": [["A","B"],["B","A"]],
                "multiplication_table": [["A","A"],["A","B"]]
            }"#,
        )
        .unwrap();
        let model = document.to_model().unwrap();
        assert_eq!(model.label(0).as_str(), "A");
        assert_eq!(model.label(1).as_str(), "B");
    }

    #[test]
    fn declared_size_must_match_grids() {
        let mut document = z3_document();
        document.size = Some(4);
        let err = document.to_model().unwrap_err();
        assert!(matches!(
            err,
            DocumentError::SizeMismatch {
                declared: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn structural_errors_pass_through() {
        let mut document = z3_document();
        document.addition_table[2][2] = "Q".to_string();
        let err = document.to_model().unwrap_err();
        assert!(matches!(err, DocumentError::InvalidTable(_)));
        assert!(format!("{err}").contains("\"Q\""));
    }

    #[test]
    fn malformed_json_is_a_document_error() {
        let err = StructureDocument::from_json("{not json").unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn report_document_round_trips() {
        let document = z3_document();
        let model = document.to_model().unwrap();
        let analysis = analyze(&model);
        assert_eq!(analysis.classification, Classification::Field);

        let report = ReportDocument::new(document.name.clone(), &model, analysis.clone());
        let json = report.to_json_pretty().unwrap();
        let back = ReportDocument::from_json(&json).unwrap();
        assert_eq!(back.analysis, analysis);
        assert_eq!(back.elements, vec!["A", "B", "C"]);
        assert_eq!(back.generated_at, report.generated_at);
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let document = StructureDocument {
            name: None,
            size: None,
            elements: None,
            addition_table: vec![vec!["A".to_string()]],
            multiplication_table: vec![vec!["A".to_string()]],
        };
        let json = serde_json::to_string(&document).unwrap();
        assert!(!json.contains("name"));
        assert!(!json.contains("\"size\""));
        assert!(!json.contains("elements"));
    }
}

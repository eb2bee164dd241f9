//! # ringcheck-schema — Structure & Report Documents
//!
//! The JSON boundary of the workspace. The core crates consume and produce
//! plain Rust values; this crate owns their external representation:
//!
//! - **Documents** ([`document`]): [`StructureDocument`], the editable
//!   definition of a finite structure (element labels plus the two operation
//!   grids), and [`ReportDocument`], the exported result of an analysis run
//!   with its generation timestamp.
//!
//! - **Presets** ([`presets`]): built-in sample structures — fields, the
//!   Boolean ring, zero-divisor examples — addressable by name.
//!
//! Structural validation is *not* duplicated here: converting a document
//! into a model funnels through `TableModel::build`, so a document is valid
//! exactly when the core accepts it.

pub mod document;
pub mod presets;

// Re-export primary types.
pub use document::{DocumentError, ReportDocument, StructureDocument};
pub use presets::{find_preset, Preset, PRESETS};

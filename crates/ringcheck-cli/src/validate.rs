//! # `ringcheck validate`
//!
//! Structural validation only: parse the document and build the table
//! model, reporting the precise violation without running any analysis.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use ringcheck_schema::StructureDocument;

/// Arguments for `ringcheck validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to a structure document (JSON).
    pub file: PathBuf,
}

/// Validate the document. Exit code 2 when it is rejected.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    match StructureDocument::from_json(&text).and_then(|document| document.to_model()) {
        Ok(model) => {
            println!(
                "ok: {} elements, both tables closed over the element set",
                model.size()
            );
            Ok(0)
        }
        Err(e) => {
            eprintln!("invalid structure document: {e}");
            Ok(2)
        }
    }
}

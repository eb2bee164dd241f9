//! # ringcheck CLI internals
//!
//! Subcommand handlers for the `ringcheck` binary, one module per command.
//! Each handler takes its parsed arguments and returns the process exit
//! code: 0 for success, 2 for a structurally invalid document (the error is
//! printed, not propagated), and `Err` for everything else, which `main`
//! maps to exit code 1.

use anyhow::{bail, Context, Result};
use std::path::Path;

use ringcheck_schema::{find_preset, StructureDocument};

pub mod analyze;
pub mod export;
pub mod presets;
pub mod render;
pub mod validate;

/// Load the structure to work on: a document file, or a named preset.
///
/// Returns the document plus a display name for messages.
pub(crate) fn load_structure(
    file: Option<&Path>,
    preset: Option<&str>,
) -> Result<(StructureDocument, String)> {
    match (file, preset) {
        (Some(path), None) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let document = StructureDocument::from_json(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            let display = document
                .name
                .clone()
                .unwrap_or_else(|| path.display().to_string());
            Ok((document, display))
        }
        (None, Some(name)) => match find_preset(name) {
            Some(preset) => Ok((preset.document(), preset.name.to_string())),
            None => bail!("unknown preset {name:?}; run `ringcheck presets` to list them"),
        },
        (None, None) => bail!("provide a structure document path or --preset NAME"),
        (Some(_), Some(_)) => bail!("pass either a document path or --preset, not both"),
    }
}

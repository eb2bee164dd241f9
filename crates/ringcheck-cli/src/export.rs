//! # `ringcheck export`
//!
//! Writes a built-in sample structure to a JSON document file, the starting
//! point for defining a structure by hand.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use ringcheck_schema::find_preset;

/// Arguments for `ringcheck export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Preset to export.
    pub name: String,

    /// Output path for the JSON document.
    #[arg(long)]
    pub out: PathBuf,
}

/// Write the preset document.
pub fn run_export(args: &ExportArgs) -> Result<u8> {
    let preset = find_preset(&args.name)
        .ok_or_else(|| anyhow!("unknown preset {:?}; run `ringcheck presets`", args.name))?;
    let json = preset.document().to_json_pretty()?;
    std::fs::write(&args.out, json + "\n")
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!("wrote {} to {}", preset.name, args.out.display());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringcheck_schema::StructureDocument;

    #[test]
    fn exported_document_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("z4.json");
        let code = run_export(&ExportArgs {
            name: "mod4".to_string(),
            out: out.clone(),
        })
        .unwrap();
        assert_eq!(code, 0);

        let document =
            StructureDocument::from_json(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(document.grid_size(), 4);
        assert!(document.to_model().is_ok());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_export(&ExportArgs {
            name: "no-such".to_string(),
            out: dir.path().join("x.json"),
        })
        .is_err());
    }
}

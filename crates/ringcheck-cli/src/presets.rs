//! # `ringcheck presets`
//!
//! Lists the built-in sample structures, or prints one of them as a
//! structure document ready for editing.

use anyhow::{anyhow, Result};
use clap::Args;

use ringcheck_schema::{find_preset, PRESETS};

/// Arguments for `ringcheck presets`.
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Print this preset as a structure document instead of listing all.
    pub name: Option<String>,
}

/// List presets or print one.
pub fn run_presets(args: &PresetsArgs) -> Result<u8> {
    match &args.name {
        Some(name) => {
            let preset = find_preset(name)
                .ok_or_else(|| anyhow!("unknown preset {name:?}; run `ringcheck presets`"))?;
            println!("{}", preset.document().to_json_pretty()?);
        }
        None => {
            for preset in PRESETS {
                println!("{:<22} {}", preset.name, preset.summary);
            }
        }
    }
    Ok(0)
}

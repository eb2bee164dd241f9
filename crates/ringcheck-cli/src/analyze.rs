//! # `ringcheck analyze`
//!
//! Loads a structure document (file or preset), runs the analysis on a
//! worker thread, and prints the text or JSON report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use ringcheck_analysis::AnalysisSession;
use ringcheck_schema::ReportDocument;

use crate::{load_structure, render};

/// Arguments for `ringcheck analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to a structure document (JSON).
    pub file: Option<PathBuf>,

    /// Analyze a built-in sample structure instead of a file.
    #[arg(long, conflicts_with = "file")]
    pub preset: Option<String>,

    /// Print the full report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Run the analysis. Exit code 2 for a structurally invalid document.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<u8> {
    let (document, display_name) = load_structure(args.file.as_deref(), args.preset.as_deref())?;
    let model = match document.to_model() {
        Ok(model) => model,
        Err(e) => {
            eprintln!("invalid structure document: {e}");
            return Ok(2);
        }
    };
    tracing::info!(name = %display_name, size = model.size(), "analyzing structure");

    let analysis = AnalysisSession::new()
        .spawn(model.clone())
        .wait()
        .context("analysis worker terminated without delivering a result")?;

    let name = document.name.clone().or(Some(display_name));
    let report = ReportDocument::new(name, &model, analysis);

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print!("{}", render::render_report(&report));
    }

    if let Some(path) = &args.report {
        let json = report.to_json_pretty()?;
        std::fs::write(path, json + "\n")
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(0)
}

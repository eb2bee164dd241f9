//! # ringcheck CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; verbosity flags select the
//! tracing filter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ringcheck_cli::analyze::{run_analyze, AnalyzeArgs};
use ringcheck_cli::export::{run_export, ExportArgs};
use ringcheck_cli::presets::{run_presets, PresetsArgs};
use ringcheck_cli::validate::{run_validate, ValidateArgs};

/// Finite ring analysis from explicit operation tables.
///
/// Takes a structure document — an element set plus addition and
/// multiplication tables — verifies the ring axioms, and classifies the
/// structure (Ring, Commutative Ring, Integral Domain, Division Ring,
/// Field, …) with the evidence for each verdict.
#[derive(Parser, Debug)]
#[command(name = "ringcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a structure document and print verdicts and classification.
    Analyze(AnalyzeArgs),

    /// Check a structure document for structural validity only.
    Validate(ValidateArgs),

    /// List built-in sample structures, or print one as a document.
    Presets(PresetsArgs),

    /// Write a built-in sample structure to a JSON document file.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Select the tracing filter from the verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Analyze(args) => run_analyze(&args),
        Commands::Validate(args) => run_validate(&args),
        Commands::Presets(args) => run_presets(&args),
        Commands::Export(args) => run_export(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

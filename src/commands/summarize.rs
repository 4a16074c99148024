//! Summarize command implementation.
//!
//! The summarize command:
//! 1. Reads the sample CSV
//! 2. Aggregates samples per (mode, sut)
//! 3. Checks every output path, so nothing is written if one is unusable
//! 4. Writes the stats CSV, flattened mode by mode
//! 5. Writes the JSON report (if requested)

use super::models::SummarizeArgs;
use crate::aggregator::{aggregate, Summary};
use crate::output::{read_samples, to_report, validate_path, write_report, write_stats};
use anyhow::{Context, Result};
use log::info;

/// Execute the summarize command
///
/// **Public** - main entry point called from main.rs
///
/// Per-mode group counts go to stderr as `processing <mode>: <n> entries`.
///
/// # Errors
/// * Unreadable or malformed sample CSV
/// * Inconsistent groups
/// * File write errors
pub fn execute_summarize(args: &SummarizeArgs) -> Result<Summary> {
    info!("Step 1/3: Reading samples from {}...", args.input_csv.display());
    let samples = read_samples(&args.input_csv)
        .with_context(|| format!("Failed to read samples from {}", args.input_csv.display()))?;

    info!("Step 2/3: Aggregating {} samples...", samples.len());
    let summary = aggregate(&samples).context("Failed to aggregate samples")?;

    for mode in summary.modes() {
        eprintln!("processing {}: {} entries", mode.mode, mode.stats.len());
    }

    info!("Step 3/3: Writing output files...");
    validate_path(&args.output_csv)
        .with_context(|| format!("Cannot write stats to {}", args.output_csv.display()))?;
    if let Some(json_path) = &args.output_json {
        validate_path(json_path)
            .with_context(|| format!("Cannot write report to {}", json_path.display()))?;
    }

    write_stats(summary.iter_stats(), &args.output_csv)
        .with_context(|| format!("Failed to write stats to {}", args.output_csv.display()))?;
    info!("✓ Stats written to: {}", args.output_csv.display());

    if let Some(json_path) = &args.output_json {
        write_report(&to_report(&summary), json_path)
            .with_context(|| format!("Failed to write report to {}", json_path.display()))?;
        info!("✓ Report written to: {}", json_path.display());
    }

    Ok(summary)
}

/// Validate summarize arguments
///
/// **Public** - can be called before execute_summarize for early validation
pub fn validate_summarize_args(args: &SummarizeArgs) -> Result<()> {
    if !args.input_csv.is_file() {
        anyhow::bail!("Input CSV not found: {}", args.input_csv.display());
    }

    if args.output_csv.as_os_str().is_empty() {
        anyhow::bail!("Output CSV path cannot be empty");
    }

    if args.input_csv == args.output_csv {
        anyhow::bail!("Output CSV would overwrite the input");
    }

    if let Some(json_path) = &args.output_json {
        if json_path == &args.output_csv || json_path == &args.input_csv {
            anyhow::bail!("JSON report would overwrite a CSV file");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_missing_input() {
        let args = SummarizeArgs {
            input_csv: PathBuf::from("/definitely/not/here.csv"),
            ..Default::default()
        };

        assert!(validate_summarize_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_same_input_and_output() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let args = SummarizeArgs {
            input_csv: temp_file.path().to_path_buf(),
            output_csv: temp_file.path().to_path_buf(),
            output_json: None,
        };

        assert!(validate_summarize_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_json_clashes_with_csv() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let args = SummarizeArgs {
            input_csv: temp_file.path().to_path_buf(),
            output_csv: PathBuf::from("stats.csv"),
            output_json: Some(PathBuf::from("stats.csv")),
        };

        assert!(validate_summarize_args(&args).is_err());
    }

    #[test]
    fn test_summarize_bad_json_path_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("samples.csv");
        std::fs::write(&input, "mode,sut,latency,path\nnative,c,0.001,p\n").unwrap();
        let output = temp_dir.path().join("stats.csv");

        let args = SummarizeArgs {
            input_csv: input,
            output_csv: output.clone(),
            output_json: Some(temp_dir.path().to_path_buf()),
        };

        assert!(execute_summarize(&args).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_validate_args_valid() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let args = SummarizeArgs {
            input_csv: temp_file.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_summarize_args(&args).is_ok());
    }
}

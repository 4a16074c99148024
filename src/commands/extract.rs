//! Extract command implementation.
//!
//! The extract command:
//! 1. Walks the trial tree
//! 2. Extracts one latency per trace
//! 3. Writes the sample CSV

use super::models::ExtractArgs;
use crate::collector::collect;
use crate::output::write_samples;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the extract command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written unless every trace extracted cleanly.
///
/// # Errors
/// * Malformed or unreadable traces
/// * File write errors
pub fn execute_extract(args: &ExtractArgs) -> Result<usize> {
    let start_time = Instant::now();

    info!("Step 1/2: Extracting samples from {}...", args.root.display());
    let samples = collect(&args.collect_config())
        .with_context(|| format!("Failed to extract samples under {}", args.root.display()))?;

    info!("Step 2/2: Writing {} samples...", samples.len());
    write_samples(&samples, &args.output)
        .with_context(|| format!("Failed to write samples to {}", args.output.display()))?;

    info!("✓ Samples written to: {}", args.output.display());
    info!("Extraction completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(samples.len())
}

/// Validate extract arguments
///
/// **Public** - can be called before execute_extract for early validation
pub fn validate_extract_args(args: &ExtractArgs) -> Result<()> {
    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if !args.root.is_dir() {
        anyhow::bail!("Root is not a directory: {}", args.root.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_valid() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = ExtractArgs {
            root: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_extract_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_missing_root() {
        let args = ExtractArgs {
            root: PathBuf::from("/definitely/not/here"),
            ..Default::default()
        };

        assert!(validate_extract_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = ExtractArgs {
            root: temp_dir.path().to_path_buf(),
            output: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_extract_args(&args).is_err());
    }
}

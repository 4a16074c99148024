//! Stats command implementation.
//!
//! Quick look at one SUT directory: extracts every trace directly inside it
//! and describes the latencies, without writing any files.

use crate::aggregator::{describe, Distribution};
use crate::collector::discover_trace_files;
use crate::parser::extract;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Describe the latencies of every trace in `directory`
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable directory or trace
/// * Malformed trace
/// * No trace files in the directory
pub fn execute_stats(directory: &Path) -> Result<Distribution> {
    let files = discover_trace_files(directory)
        .with_context(|| format!("Failed to list {}", directory.display()))?;

    let mut latencies = Vec::with_capacity(files.len());
    for path in &files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let latency =
            extract(&content).with_context(|| format!("Malformed trace {}", path.display()))?;
        debug!("{}: {}", path.display(), latency);
        latencies.push(latency);
    }

    let dist = describe(&latencies)
        .with_context(|| format!("No trace files in {}", directory.display()))?;

    info!("Described {} traces in {}", dist.count, directory.display());
    Ok(dist)
}

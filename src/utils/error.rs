//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting a latency from one trace
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    #[error("found no starting exec event on the first line")]
    NoStartEvent,

    #[error("found no write to stdout after the exec event")]
    NoWriteEvent,

    #[error("write at {write} precedes exec completion at {start}")]
    NegativeLatency { start: f64, write: f64 },
}

/// Errors that can occur when constructing a sample
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("latency must be a non-negative number, got {0}")]
    InvalidLatency(f64),
}

/// Errors that can occur when summarizing a group of samples
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("no samples in group")]
    EmptyGroup,

    #[error(
        "inconsistent group: expected {expected_mode}/{expected_sut}, found {found_mode}/{found_sut}"
    )]
    InconsistentGroup {
        expected_mode: String,
        expected_sut: String,
        found_mode: String,
        found_sut: String,
    },
}

/// Errors that can occur while walking a trial tree
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("malformed trace {}: {source}", path.display())]
    MalformedTrace { path: PathBuf, source: TraceError },

    #[error("invalid sample from {}: {source}", path.display())]
    InvalidSample { path: PathBuf, source: SampleError },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} traces failed to extract:{}", .0.len(), list_errors(.0))]
    Multiple(Vec<CollectError>),
}

/// Errors that can occur during file input/output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },
}

fn list_errors(errors: &[CollectError]) -> String {
    errors.iter().map(|e| format!("\n  {}", e)).collect()
}

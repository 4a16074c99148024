//! Trace parsing and record definitions.
//!
//! This module handles:
//! - Matching exec-completion and stdout-write lines
//! - Extracting the startup latency from one trace
//! - Defining the sample and stats records

pub mod matcher;
pub mod perf_trace;
pub mod schema;

// Re-export main types
pub use matcher::{match_start, match_write};
pub use perf_trace::extract;
pub use schema::{round_latency, ModeStats, Report, Sample, Stats};

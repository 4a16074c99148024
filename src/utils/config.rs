//! Configuration and constants for the CLI.

use std::path::PathBuf;

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Decimal places kept for latencies, means and medians.
/// Tracing is not precise below ~100 microseconds.
pub const LATENCY_PRECISION: usize = 4;

/// Suffixes a trial file name must carry, in order (`<trial>.trace.txt`)
pub const TRACE_SUFFIXES: &[&str] = &["trace", "txt"];

/// Header of the sample interchange CSV
pub const SAMPLE_HEADER: &[&str] = &["mode", "sut", "latency", "path"];

/// Header of the stats report CSV
pub const STATS_HEADER: &[&str] = &["mode", "sut", "mean", "median", "min", "max"];

/// What the collector does when a trace fails to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole pass on the first bad trace
    #[default]
    FailFast,

    /// Keep going, then fail with every error found
    CollectAll,
}

/// Runtime configuration for a collection pass
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Directory holding `<mode>/<sut>/<trial>.trace.txt`
    pub root: PathBuf,

    /// Reaction to malformed traces
    pub policy: ErrorPolicy,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            policy: ErrorPolicy::FailFast,
        }
    }
}

//! Record types shared by every stage of the pipeline.
//!
//! A `Sample` is one trial's measurement; a `Stats` is the summary of one
//! (mode, sut) group. Both are immutable once built.

use crate::utils::config::LATENCY_PRECISION;
use crate::utils::error::SampleError;
use serde::{Deserialize, Serialize};

/// The result of a single trial run
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    mode: String,
    sut: String,
    latency: f64,
    source: String,
}

impl Sample {
    /// Create a sample, rounding the latency to the report precision
    ///
    /// # Errors
    /// * `SampleError::InvalidLatency` - latency is negative or not a number
    pub fn new(
        mode: impl Into<String>,
        sut: impl Into<String>,
        latency: f64,
        source: impl Into<String>,
    ) -> Result<Self, SampleError> {
        if latency.is_nan() || latency < 0.0 {
            return Err(SampleError::InvalidLatency(latency));
        }

        Ok(Self {
            mode: mode.into(),
            sut: sut.into(),
            latency: round_latency(latency),
            source: source.into(),
        })
    }

    /// Execution environment the trial ran under
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// System under test
    pub fn sut(&self) -> &str {
        &self.sut
    }

    /// Rounded latency, in the trace's time unit
    pub fn latency(&self) -> f64 {
        self.latency
    }

    /// Where the measurement came from (usually a trace path)
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Summary statistics for one (mode, sut) group
///
/// Built by `Stats::from_samples` in the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub(crate) mode: String,
    pub(crate) sut: String,
    pub(crate) mean: f64,
    pub(crate) median: f64,
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl Stats {
    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn sut(&self) -> &str {
        &self.sut
    }

    /// Mean latency, rounded
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Median latency, rounded
    pub fn median(&self) -> f64 {
        self.median
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// All SUT stats of one mode, fastest mean first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeStats {
    pub mode: String,
    pub stats: Vec<Stats>,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Modes in first-encounter order
    pub modes: Vec<ModeStats>,
}

/// Round a latency to `LATENCY_PRECISION` decimal places
///
/// Goes through the decimal formatter so the result is the nearest
/// decimal to the exact binary value, not to a scaled product.
pub fn round_latency(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", LATENCY_PRECISION, value)
        .parse()
        .unwrap_or(value)
}

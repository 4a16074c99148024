//! Aggregation of samples into per-mode statistics.
//!
//! This module transforms collected samples into:
//! - One `Stats` per (mode, sut) group
//! - A per-mode ranking of SUTs by mean latency

pub mod grouping;
pub mod stats;

// Re-export main types and functions
pub use grouping::{aggregate, Summary};
pub use stats::{describe, Distribution};

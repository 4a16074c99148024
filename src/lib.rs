//! Startup Showdown
//!
//! Extracts process startup latency from `perf trace` logs and aggregates
//! it into per-mode, per-SUT statistics.
//!
//! The pipeline runs in three stages:
//! - `parser` finds the exec and first stdout write in one trace
//! - `collector` walks `<mode>/<sut>/<trial>.trace.txt` into samples
//! - `aggregator` groups samples and ranks SUTs by mean latency
//!
//! `output` reads and writes the CSV and JSON files in between, and
//! `commands` wires the stages together for the `showdown` CLI.

pub mod aggregator;
pub mod collector;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

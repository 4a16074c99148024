//! Startup latency extraction from a single trace.
//!
//! The interval runs from the process's `exec` completion to its first
//! write to stdout. Timestamps are plain `f64` seconds: 53 bits of mantissa
//! hold centuries of microsecond-resolution uptime.

use super::matcher::{match_start, match_write};
use crate::utils::error::TraceError;
use log::debug;

/// Extract the startup latency from a trace's full text
///
/// **Public** - main entry point for parsing
///
/// The start event must be on the very first line; the trace is malformed
/// otherwise, whatever follows. The first qualifying write after it ends
/// the interval and later writes are never looked at.
///
/// # Errors
/// * `TraceError::NoStartEvent` - first line is not an exec completion
/// * `TraceError::NoWriteEvent` - no write to fd 1 anywhere after it
/// * `TraceError::NegativeLatency` - the write is timestamped before the exec
pub fn extract(content: &str) -> Result<f64, TraceError> {
    let mut lines = content.lines();

    let start = lines
        .next()
        .and_then(match_start)
        .ok_or(TraceError::NoStartEvent)?;

    let write = lines.find_map(match_write).ok_or(TraceError::NoWriteEvent)?;

    let latency = write - start;
    if latency < 0.0 {
        return Err(TraceError::NegativeLatency { start, write });
    }

    debug!("exec at {}, first write at {}: {}", start, write, latency);
    Ok(latency)
}

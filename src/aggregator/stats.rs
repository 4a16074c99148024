//! Summary statistics over latencies.

use crate::parser::schema::{round_latency, Sample, Stats};
use crate::utils::config::LATENCY_PRECISION;
use crate::utils::error::StatsError;
use std::fmt;

/// Descriptive statistics of a set of latencies (unrounded)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mean {}", self.mean)?;
        writeln!(f, "median {}", self.median)?;
        writeln!(f, "min {}", self.min)?;
        writeln!(f, "max {}", self.max)
    }
}

/// Describe a set of latencies
///
/// # Returns
/// `None` for an empty set
pub fn describe(latencies: &[f64]) -> Option<Distribution> {
    if latencies.is_empty() {
        return None;
    }

    let count = latencies.len();
    let mean = latencies.iter().sum::<f64>() / count as f64;

    let mut sorted = latencies.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Some(Distribution {
        count,
        mean,
        median,
        min: sorted[0],
        max: sorted[count - 1],
    })
}

/// Mean of latencies that are already rounded to `LATENCY_PRECISION`
///
/// Sums whole ten-thousandths as integers, so the result is the nearest
/// `f64` to the exact mean whatever the sample order.
fn exact_mean(latencies: &[f64]) -> f64 {
    let scale = 10f64.powi(LATENCY_PRECISION as i32);
    let ticks: i128 = latencies
        .iter()
        .map(|l| (l * scale).round() as i128)
        .sum();
    ticks as f64 / (latencies.len() as f64 * scale)
}

impl Stats {
    /// Summarize one (mode, sut) group
    ///
    /// **Public** - main constructor for stats
    ///
    /// Mean and median are rounded to the latency precision; min and max
    /// are the group's latencies as-is.
    ///
    /// # Errors
    /// * `StatsError::EmptyGroup` - no samples given
    /// * `StatsError::InconsistentGroup` - samples disagree on mode or sut
    pub fn from_samples<'a, I>(samples: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = &'a Sample>,
    {
        let mut samples = samples.into_iter();
        let first = samples.next().ok_or(StatsError::EmptyGroup)?;

        let mut latencies = vec![first.latency()];
        for sample in samples {
            if sample.mode() != first.mode() || sample.sut() != first.sut() {
                return Err(StatsError::InconsistentGroup {
                    expected_mode: first.mode().to_string(),
                    expected_sut: first.sut().to_string(),
                    found_mode: sample.mode().to_string(),
                    found_sut: sample.sut().to_string(),
                });
            }
            latencies.push(sample.latency());
        }

        let dist = describe(&latencies).ok_or(StatsError::EmptyGroup)?;

        Ok(Stats {
            mode: first.mode().to_string(),
            sut: first.sut().to_string(),
            mean: round_latency(exact_mean(&latencies)),
            median: round_latency(dist.median),
            min: dist.min,
            max: dist.max,
        })
    }
}

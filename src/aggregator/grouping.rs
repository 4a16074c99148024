//! Group samples by (mode, sut) and rank SUTs within each mode.
//!
//! Modes keep the order in which they were first seen. Within a mode, SUTs
//! are ordered by ascending mean latency; equal means keep first-seen order.

use crate::parser::schema::{ModeStats, Sample, Stats};
use crate::utils::error::StatsError;
use log::debug;
use std::collections::HashMap;

/// Aggregated stats for every mode
///
/// **Public** - returned from `aggregate`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    modes: Vec<ModeStats>,
}

impl Summary {
    /// Ranked stats for one mode
    pub fn get(&self, mode: &str) -> Option<&[Stats]> {
        self.modes
            .iter()
            .find(|m| m.mode == mode)
            .map(|m| m.stats.as_slice())
    }

    /// Modes in first-encounter order
    pub fn modes(&self) -> &[ModeStats] {
        &self.modes
    }

    /// Every stats entry, mode by mode
    pub fn iter_stats(&self) -> impl Iterator<Item = &Stats> {
        self.modes.iter().flat_map(|m| m.stats.iter())
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

/// Samples of one mode, bucketed by SUT in first-seen order
struct ModeGroup<'a> {
    mode: &'a str,
    sut_index: HashMap<&'a str, usize>,
    suts: Vec<Vec<&'a Sample>>,
}

/// Aggregate samples into per-mode ranked stats
///
/// **Public** - main entry point for aggregation
///
/// # Returns
/// An empty summary when there are no samples
///
/// # Errors
/// * `StatsError` - a group failed to summarize; indicates a grouping bug
pub fn aggregate<'a, I>(samples: I) -> Result<Summary, StatsError>
where
    I: IntoIterator<Item = &'a Sample>,
{
    let mut mode_index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ModeGroup> = Vec::new();

    for sample in samples {
        let mi = *mode_index.entry(sample.mode()).or_insert_with(|| {
            groups.push(ModeGroup {
                mode: sample.mode(),
                sut_index: HashMap::new(),
                suts: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[mi];
        match group.sut_index.get(sample.sut()) {
            Some(&si) => group.suts[si].push(sample),
            None => {
                group.sut_index.insert(sample.sut(), group.suts.len());
                group.suts.push(vec![sample]);
            }
        }
    }

    let mut modes = Vec::with_capacity(groups.len());
    for group in groups {
        let mut stats = group
            .suts
            .iter()
            .map(|samples| Stats::from_samples(samples.iter().copied()))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable: equal means stay in first-seen order
        stats.sort_by(|a, b| a.mean().total_cmp(&b.mean()));

        debug!("Mode {}: {} SUTs", group.mode, stats.len());
        modes.push(ModeStats {
            mode: group.mode.to_string(),
            stats,
        });
    }

    Ok(Summary { modes })
}

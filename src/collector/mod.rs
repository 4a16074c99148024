//! Sample collection from a tree of trial traces.
//!
//! Walks `<root>/<mode>/<sut>/<trial>.trace.txt`, extracts one latency per
//! trace and tags it with its mode and SUT. By default the first malformed
//! trace aborts the whole pass.

pub mod walker;

pub use walker::{discover_trace_files, discover_trials, is_trace_file_name, TrialFile};

use crate::parser::{extract, Sample};
use crate::utils::config::{CollectConfig, ErrorPolicy};
use crate::utils::error::CollectError;
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Lazily extract samples from every trial under `root`
///
/// **Public** - streaming entry point
///
/// The tree is listed up front; traces are read one at a time as the
/// iterator is consumed.
///
/// # Errors
/// * `CollectError::Io` - the tree cannot be listed
pub fn samples(
    root: &Path,
) -> Result<impl Iterator<Item = Result<Sample, CollectError>>, CollectError> {
    let trials = discover_trials(root)?;
    Ok(trials.into_iter().map(|trial| load_sample(&trial)))
}

/// Collect every sample under the configured root
///
/// **Public** - main entry point for collection
///
/// # Errors
/// * Under `ErrorPolicy::FailFast`, the first error in path order
/// * Under `ErrorPolicy::CollectAll`, `CollectError::Multiple` listing every
///   trace that failed
pub fn collect(config: &CollectConfig) -> Result<Vec<Sample>, CollectError> {
    info!("Collecting samples under {}", config.root.display());

    let found = match config.policy {
        ErrorPolicy::FailFast => samples(&config.root)?.collect::<Result<Vec<_>, _>>()?,
        ErrorPolicy::CollectAll => {
            let mut collected = Vec::new();
            let mut errors = Vec::new();
            for result in samples(&config.root)? {
                match result {
                    Ok(sample) => collected.push(sample),
                    Err(e) => {
                        warn!("{}", e);
                        errors.push(e);
                    }
                }
            }
            if !errors.is_empty() {
                return Err(CollectError::Multiple(errors));
            }
            collected
        }
    };

    info!("Collected {} samples", found.len());
    Ok(found)
}

/// Read and extract one trial
///
/// **Public** - a single unit of collection work
pub fn load_sample(trial: &TrialFile) -> Result<Sample, CollectError> {
    let content = fs::read_to_string(&trial.path).map_err(|source| CollectError::Io {
        path: trial.path.clone(),
        source,
    })?;

    let latency = extract(&content).map_err(|source| CollectError::MalformedTrace {
        path: trial.path.clone(),
        source,
    })?;

    debug!("{}: {}", trial.path.display(), latency);

    Sample::new(
        trial.mode.as_str(),
        trial.sut.as_str(),
        latency,
        trial.path.display().to_string(),
    )
    .map_err(|source| CollectError::InvalidSample {
        path: trial.path.clone(),
        source,
    })
}

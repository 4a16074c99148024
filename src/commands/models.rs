use crate::utils::config::{CollectConfig, ErrorPolicy};
use std::path::PathBuf;

/// Arguments for the extract command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ExtractArgs {
    /// Directory holding `<mode>/<sut>/<trial>.trace.txt`
    pub root: PathBuf,

    /// Output path for the sample CSV
    pub output: PathBuf,

    /// Report every malformed trace instead of stopping at the first
    pub keep_going: bool,
}

impl Default for ExtractArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("samples.csv"),
            keep_going: false,
        }
    }
}

impl ExtractArgs {
    pub fn collect_config(&self) -> CollectConfig {
        CollectConfig {
            root: self.root.clone(),
            policy: if self.keep_going {
                ErrorPolicy::CollectAll
            } else {
                ErrorPolicy::FailFast
            },
        }
    }
}

/// Arguments for the summarize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SummarizeArgs {
    /// Sample CSV produced by `extract`
    pub input_csv: PathBuf,

    /// Output path for the stats CSV
    pub output_csv: PathBuf,

    /// Output path for a JSON report (optional)
    pub output_json: Option<PathBuf>,
}

impl Default for SummarizeArgs {
    fn default() -> Self {
        Self {
            input_csv: PathBuf::from("samples.csv"),
            output_csv: PathBuf::from("stats.csv"),
            output_json: None,
        }
    }
}

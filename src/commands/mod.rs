//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod extract;
pub mod models;
pub mod stats;
pub mod summarize;

// Re-export main command functions
pub use extract::{execute_extract, validate_extract_args};
pub use models::{ExtractArgs, SummarizeArgs};
pub use stats::execute_stats;
pub use summarize::{execute_summarize, validate_summarize_args};

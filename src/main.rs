//! Startup Showdown CLI
//!
//! Measures process startup latency (exec to first stdout write) from
//! `perf trace` logs and summarizes it per mode and system under test.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use startup_showdown::commands::{
    execute_extract, execute_stats, execute_summarize, validate_extract_args,
    validate_summarize_args, ExtractArgs, SummarizeArgs,
};
use startup_showdown::utils::config::SCHEMA_VERSION;

/// Startup Showdown - startup latency from perf traces
#[derive(Parser, Debug)]
#[command(name = "showdown")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract one sample per trace into a CSV
    Extract {
        /// Output path for the sample CSV
        output: PathBuf,

        /// Directory holding <mode>/<sut>/<trial>.trace.txt
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Report every malformed trace, not just the first
        #[arg(long)]
        keep_going: bool,
    },

    /// Summarize a sample CSV into per-SUT stats
    Summarize {
        /// Sample CSV produced by `extract`
        input_csv: PathBuf,

        /// Output path for the stats CSV
        output_csv: PathBuf,

        /// Also write a JSON report
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Print latency stats for the traces in one directory
    Stats {
        /// Directory of <trial>.trace.txt files
        directory: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Extract {
            output,
            root,
            keep_going,
        } => {
            let args = ExtractArgs {
                root,
                output,
                keep_going,
            };
            validate_extract_args(&args)?;
            execute_extract(&args)?;
        }

        Commands::Summarize {
            input_csv,
            output_csv,
            json,
        } => {
            let args = SummarizeArgs {
                input_csv,
                output_csv,
                output_json: json,
            };
            validate_summarize_args(&args)?;
            execute_summarize(&args)?;
        }

        Commands::Stats { directory } => {
            let dist = execute_stats(&directory)?;
            println!("{}", dist);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Startup Showdown v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
}

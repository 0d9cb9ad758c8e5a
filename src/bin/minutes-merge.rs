//! CLI tool to merge two meeting-minutes CSV files into one sorted file.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tablepipe::merge_minutes;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

/// Merge two minutes files, deduplicate, and write them sorted by date.
///
/// The output header comes from the first input file.
#[derive(Parser)]
#[command(name = "minutes-merge")]
struct Cli {
    /// First minutes file (its header is reused for the output)
    file_a: PathBuf,

    /// Second minutes file
    file_b: PathBuf,

    /// Merged output file
    #[arg(short, long)]
    output: PathBuf,

    /// Show paths and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("Input A: {}", cli.file_a.display());
        eprintln!("Input B: {}", cli.file_b.display());
        eprintln!("Output:  {}", cli.output.display());
    }

    match merge_minutes(&cli.file_a, &cli.file_b, &cli.output) {
        Ok(merged) => {
            if cli.verbose {
                eprintln!("Records: {} written to {}", merged.len(), cli.output.display());
            }
        }
        Err(e) => {
            error!("merge failed: {e}");
            process::exit(1);
        }
    }
}

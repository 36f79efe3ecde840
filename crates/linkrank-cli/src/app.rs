//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagerank")]
#[command(
    author,
    version,
    about = "Estimate PageRank of a directory of HTML pages by sampling and by iteration"
)]
pub struct Cli {
    /// Directory containing the .html pages
    pub corpus: PathBuf,

    /// Damping factor, in (0, 1)
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of samples for the random surfer
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Per-page convergence tolerance for iteration
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Iteration cap
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Seed for the random surfer (system entropy if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a YAML config file
    #[arg(long, env = "LINKRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}

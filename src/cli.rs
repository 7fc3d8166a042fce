use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "layermap")]
#[command(about = "Probabilistic architecture-layer classifier for source repositories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a repository's files into architecture layers
    Analyze {
        /// Path to a checked-out repository
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML rules file extending or replacing the built-in table
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Skip git history; report churn 0 for every file
        #[arg(long = "no-churn")]
        no_churn: bool,

        /// Disable parallel classification
        #[arg(long = "no-parallel")]
        no_parallel: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Colored layer and module tables
    Terminal,
    /// Full report as JSON
    Json,
}

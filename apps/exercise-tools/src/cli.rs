//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use pagefilter_core::{ExclusionRange, RangePolicy};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exercise-tools")]
#[command(
    version,
    about = "Trim page ranges from PDFs and build the exercise manifest"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a copy of a PDF without the given page range
    RemovePages {
        /// Source PDF (never modified)
        input: PathBuf,

        /// Output PDF, created or overwritten
        #[arg(short, long)]
        output: PathBuf,

        /// 1-based inclusive range to drop, e.g. "25-39" or "7"
        #[arg(short, long)]
        range: ExclusionRange,

        /// How to treat ranges outside the document or with start > end
        #[arg(long, value_enum, default_value_t = PolicyArg::Clamp)]
        policy: PolicyArg,
    },

    /// Write a sorted JSON list of the PDF files in a directory
    Manifest {
        /// Project root; defaults derive from <root>/public
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Directory to scan [default: <root>/public/exercises]
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Manifest file [default: <root>/public/exerciseList.json]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Execute every job in a TOML job file
    Run {
        /// Path to the job file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print the job file equivalent to the original hardcoded scripts
    PrintDefaultConfig,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Clamp,
    Reject,
}

impl From<PolicyArg> for RangePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Clamp => RangePolicy::Clamp,
            PolicyArg::Reject => RangePolicy::Reject,
        }
    }
}

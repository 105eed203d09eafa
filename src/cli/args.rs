//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// debrief - Interview transcript analysis with AI-powered insights
#[derive(Parser, Debug)]
#[command(name = "debrief")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an interview transcript and chart the scores
    Analyze {
        /// Path to the transcript file (overrides transcript.path from config)
        #[arg(short, long)]
        transcript: Option<PathBuf>,

        /// Print the score table as text instead of opening the chart
        #[arg(long)]
        no_chart: bool,
    },

    /// Extract the score table from a saved model response
    Extract {
        /// Path to a file containing the raw model response text
        response: PathBuf,

        /// Print the extracted scores as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

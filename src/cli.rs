use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "car-ai")]
#[command(about = "AI car photo analysis and report generation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (includes per-image previews)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze car photos via the analysis service
    Analyze {
        /// Image files and/or folders (max 10 images total)
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Save the raw analysis outcome as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also export the PDF report
        #[arg(short, long)]
        report: bool,

        /// Directory for the exported report (default: config or current dir)
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Analysis server URL (overrides config and environment)
        #[arg(short, long)]
        server: Option<String>,
    },

    /// Generate the PDF report from a saved outcome JSON
    Report {
        /// Outcome JSON produced by `analyze --output`
        #[arg(required = true)]
        input: PathBuf,

        /// Directory for the exported report (default: alongside the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or edit configuration
    Config {
        /// Set the analysis server URL
        #[arg(long)]
        set_server_url: Option<String>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}

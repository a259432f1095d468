//! CLI argument definitions.

use clap::Parser;
use flowscribe::{DEFAULT_FLOW_PATH, ProjectionPolicy};
use std::path::PathBuf;

/// Flowscribe - plain-language walkthroughs of recorded product flows
#[derive(Parser, Debug)]
#[command(name = "flowscribe")]
#[command(about = "Turn recorded product flows into plain-language walkthroughs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the flow JSON file
    #[arg(default_value = DEFAULT_FLOW_PATH)]
    pub flow: PathBuf,

    /// Projection policy: strict or passthrough (overrides configuration)
    #[arg(long)]
    pub policy: Option<ProjectionPolicy>,

    /// Print the extracted records and stop
    #[arg(long)]
    pub extract_only: bool,

    /// Skip illustration
    #[arg(long)]
    pub no_image: bool,

    /// Directory for generated files (overrides configuration)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Additional configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

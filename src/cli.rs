//! Command-line argument parsing for the scenario runner

use clap::Parser;
use std::path::PathBuf;

/// Replay a panel docking scenario and print the resulting layout
#[derive(Parser, Debug)]
#[command(name = "snapdock", version, about = "Replay a panel docking scenario")]
pub struct CliArgs {
    /// Scenario file (YAML)
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Config file to use instead of ~/.config/snapdock/config.yaml
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print every published snapshot, not just the final one
    #[arg(short = 'e', long)]
    pub every_publish: bool,

    /// Pretty-print the JSON output
    #[arg(short = 'p', long)]
    pub pretty: bool,
}

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Node Sweeper - recursively find and delete node_modules directories
#[derive(Parser, Debug)]
#[command(name = "node-sweeper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to sweep
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

use anyhow::Result;
use clap::{CommandFactory, Parser};

use node_sweeper::cli::Cli;
use node_sweeper::purge::{purge_tree, PurgeOutcome};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "node-sweeper", &mut std::io::stdout());
        return Ok(());
    }

    tracing::info!(path = %cli.path.display(), "Starting sweep");

    let summary = purge_tree(&cli.path, |outcome| match outcome {
        PurgeOutcome::Removed { path, .. } => {
            println!("Deleting: {}", path.display());
        }
        PurgeOutcome::Failed { path, error } => {
            println!("Failed to delete {}: {}", path.display(), error);
        }
    })?;

    println!();
    println!("Done. Deleted {} 'node_modules' folder(s).", summary.removed);

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("node_sweeper={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

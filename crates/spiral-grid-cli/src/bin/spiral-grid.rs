//! spiral-grid CLI
//!
//! Usage:
//!   spiral-grid [options] show
//!   spiral-grid [options] validate [max]
//!   spiral-grid [options] locate <order>
//!   spiral-grid [options] index <row> <column>

use spiral_grid_cli::CliConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spiral_grid=info,spiral_grid_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::from_env()?.apply_args(std::env::args().skip(1));
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            spiral_grid_cli::print_usage();
            std::process::exit(2);
        }
    };

    tracing::debug!(?config, "configuration loaded");

    let stdout = std::io::stdout();
    spiral_grid_cli::run(&config, &mut stdout.lock())?;

    Ok(())
}

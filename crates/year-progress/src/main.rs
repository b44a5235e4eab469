//! CLI entry point for year-progress.

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use config::{LaunchConfig, Mode};

mod clock;
mod config;
mod tui;

/// Progress bars for today, this month, this year and optionally a lifespan.
#[derive(Parser, Debug)]
#[command(
    name = "year-progress",
    version,
    about = "year-progress: how much of the day, month and year has already gone by"
)]
struct Cli {
    /// Pass `death` to add a lifespan bar.
    #[arg(value_enum)]
    mode: Option<Mode>,

    /// Expected lifespan in whole years; required with `death`.
    #[arg(allow_negative_numbers = true)]
    life_expectancy: Option<String>,
}

fn main() -> Result<()> {
    let Cli {
        mode,
        life_expectancy,
    } = Cli::parse();

    install_tracing();

    let config = LaunchConfig::from_env(mode, life_expectancy.as_deref())?;
    debug!(?config, "resolved launch configuration");
    tui::run(config)
}

fn install_tracing() {
    // RUST_LOG overrides the INFO default.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

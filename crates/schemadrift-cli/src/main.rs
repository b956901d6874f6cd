mod config;
mod logging;
mod output;
mod pipeline;

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use config::{Overrides, load_settings};
use logging::init_logging;
use pipeline::run_comparison;
use schemadrift_core::Error as CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("output error: {0}")]
    Output(#[from] io::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "schemadrift",
    version,
    about = "Compare a local and a remote PostgreSQL column dump"
)]
struct Cli {
    /// TOML config file (defaults to ./schemadrift.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(flatten)]
    overrides: Overrides,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    settings.apply(cli.overrides);
    init_logging(settings.logging.format)?;

    tracing::info!(
        event = "run_started",
        local = %settings.paths.local.display(),
        remote = %settings.paths.remote.display()
    );
    let timer = Instant::now();

    let stdout = io::stdout();
    let summary = run_comparison(&settings.paths, &mut stdout.lock())?;

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(
        event = "run_finished",
        status = "success",
        local_tables = summary.local_tables,
        remote_tables = summary.remote_tables,
        total_issues = summary.total_issues,
        fix_statements = summary.fix_statements.unwrap_or(0),
        duration_ms = duration_ms
    );

    Ok(())
}

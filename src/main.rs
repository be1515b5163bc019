//! flower-care: plants the configured garden, tends it once and reports.

use anyhow::{Context, Result};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flower_care::config::OutputFormat;
use flower_care::{Garden, GardenConfig};

/// Initialize logging with RUST_LOG environment variable support
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let project_root = std::env::current_dir().context("cannot determine current directory")?;
    let config = GardenConfig::load(Some(&project_root)).context("failed to load configuration")?;

    // Nothing is logged before this point; config sources are reported below.
    init_logging(&config.log.level);
    tracing::info!("Starting flower-care in {:?}", project_root);
    match GardenConfig::project_config_path(&project_root) {
        Some(path) => tracing::debug!("Using project config {:?}", path),
        None => tracing::debug!("No project config in {:?}", project_root),
    }

    let mut garden = Garden::from_config(&config)?;
    if garden.is_empty() {
        tracing::warn!("No flowers configured");
        return Ok(());
    }

    let report = garden.tend_with_report();
    match config.output.format {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

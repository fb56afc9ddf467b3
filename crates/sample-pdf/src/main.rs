//! Writes the ~50,000 word fixture to its fixed path and prints the path.

use anyhow::{Context, Result};
use sample_pdf::{generate, FixtureConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the output path
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = FixtureConfig::default();
    let summary = generate(&config)
        .with_context(|| format!("Failed to generate {}", config.output.display()))?;

    println!("{}", summary.output.display());
    Ok(())
}

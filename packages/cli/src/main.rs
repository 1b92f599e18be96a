mod config;
mod generate;

use anyhow::Context;
use colored::Colorize;
use config::{Config, OUTPUT_FILE};
use generate::generate;

/// Compiles the design token documents under `src/tokens` into `theme.css`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    if let Err(err) = run().await {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("Cannot get current directory")?;
    let config = Config::resolve(&cwd);

    let stylesheet = generate(&config)
        .await
        .with_context(|| format!("Failed to generate {}", OUTPUT_FILE))?;

    println!(
        "  {} {} ({} properties, {} utilities)",
        "✓".green(),
        OUTPUT_FILE,
        stylesheet.properties.len(),
        stylesheet.utilities.len()
    );
    Ok(())
}

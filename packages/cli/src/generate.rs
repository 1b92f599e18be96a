use crate::config::Config;
use anyhow::{Context, Result};
use gds_common::TokenSet;
use gds_compiler_css::{compile, Stylesheet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Load every token document, compile, and replace the output file.
///
/// Nothing is written unless loading and compiling both succeed.
#[instrument(skip_all, fields(tokens = %config.tokens_dir.display()))]
pub async fn generate(config: &Config) -> Result<Stylesheet> {
    let tokens = TokenSet::load(&config.tokens_dir)
        .await
        .context("Failed to load token documents")?;

    let stylesheet = compile(&tokens);
    let css = stylesheet.to_css();

    write_whole_file(&config.output_file, &css)
        .await
        .with_context(|| format!("Failed to write {}", config.output_file.display()))?;

    info!(
        output = %config.output_file.display(),
        bytes = css.len(),
        "Wrote stylesheet"
    );
    Ok(stylesheet)
}

/// Write to a sibling staging file, then rename it over `path`.
async fn write_whole_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let staging = staging_path(path);

    let result = match tokio::fs::write(&staging, contents).await {
        Ok(()) => tokio::fs::rename(&staging, path).await,
        Err(err) => Err(err),
    };

    if result.is_err() {
        let _ = tokio::fs::remove_file(&staging).await;
    }
    result
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncReadExt;

/// Reads the whole file at `path`, or all of stdin when no path is given.
pub async fn read_input(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(path) => {
            debug!("reading {}", path.display());
            fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            debug!("reading stdin");
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to read stdin")?;
            text
        }
    };

    debug!("read {} bytes", text.len());
    Ok(text)
}

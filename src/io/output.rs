use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tokio::fs;

use crate::models::Extraction;

#[derive(Serialize)]
struct JsonReport<'a> {
    count: usize,
    urls: &'a [String],
}

/// Count line, blank line, then one URL per line.
pub fn render_report(extraction: &Extraction) -> String {
    let mut content = format!("Found {} unique image URLs\n\n", extraction.count());

    for url in &extraction.urls {
        content.push_str(url);
        content.push('\n');
    }

    content
}

pub fn render_json(extraction: &Extraction) -> Result<String> {
    let report = JsonReport {
        count: extraction.count(),
        urls: &extraction.urls,
    };
    let mut content = serde_json::to_string_pretty(&report)?;
    content.push('\n');
    Ok(content)
}

/// Writes `content` to `out` and flushes; a closed pipe surfaces as an error.
pub fn emit<W: Write>(mut out: W, content: &str) -> Result<()> {
    out.write_all(content.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write stdout")?;
    Ok(())
}

pub async fn write_url_list(path: &Path, extraction: &Extraction) -> Result<()> {
    let content: String = extraction
        .urls
        .iter()
        .map(|url| format!("{}\n", url))
        .collect();

    fs::write(path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

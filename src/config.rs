use clap::Parser;
use std::path::PathBuf;

/// Notion-hosted image proxy URLs, stopping at whitespace, `)` or `>`.
/// FS, GS, RS and US (0x1C..=0x1F) also end a match.
pub const IMAGE_URL_PATTERN: &str =
    r"https://lifegorithms\.notion\.site/image/https[^\s\x1C-\x1F\)>]*";

#[derive(Parser, Debug)]
#[command(about = "Extract unique Notion image URLs from markdown")]
pub struct Args {
    /// Markdown file to scan (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Also write the unique URLs to this file, one per line
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

use anyhow::Result;
use clap::Parser;
use log::{debug, info};

mod config;
mod discovery;
mod io;
mod models;

use crate::config::Args;
use crate::discovery::extract;
use crate::io::*;
use crate::models::ImagePatterns;

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    });
    // RUST_LOG, when set, takes precedence over the flag.
    builder.parse_default_env();
    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("{:?}", args);

    let patterns = ImagePatterns::new();
    let text = read_input(args.input.as_deref()).await?;
    let extraction = extract(&text, &patterns);
    info!("found {} unique image URLs", extraction.count());

    if let Some(path) = &args.output {
        write_url_list(path, &extraction).await?;
        info!("wrote URL list to {}", path.display());
    }

    let content = if args.json {
        render_json(&extraction)?
    } else {
        render_report(&extraction)
    };
    emit(std::io::stdout().lock(), &content)?;

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use labelcheck_core::{Config, Corrector};
use labelcheck_tools::logging;
use tracing::info;

/// Compile the text dictionaries into a snapshot for fast start-up.
#[derive(Parser)]
struct Args {
    #[arg(long)]
    unigrams: PathBuf,

    #[arg(long)]
    bigrams: PathBuf,

    /// Corrector configuration (TOML); stored in the snapshot
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "data/dictionary.bin")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init("info");

    let config = match &args.config {
        Some(p) => Config::load_toml(p).with_context(|| format!("loading config {}", p.display()))?,
        None => Config::default(),
    };
    let corrector = Corrector::load(&args.unigrams, &args.bigrams, &config)
        .context("loading dictionaries")?;
    corrector
        .save_snapshot(&args.out)
        .with_context(|| format!("writing snapshot {}", args.out.display()))?;

    let stats = corrector.stats();
    info!(
        unigrams = stats.unigrams,
        bigrams = stats.bigrams,
        skipped = stats.skipped_unigram_lines + stats.skipped_bigram_lines,
        "wrote {}",
        args.out.display()
    );
    Ok(())
}

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use labelcheck_core::{Config, Corrector, WatchLists};
use labelcheck_tools::logging;
use labelcheck_tools::report::{join_lines, AnalysisReport};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Correct OCR text of an ingredient label and check it against watch-lists.
#[derive(Parser)]
#[command(name = "labelcheck")]
struct Args {
    /// Unigram frequency dictionary (`term count` per line)
    #[arg(long, requires = "bigrams", conflicts_with = "snapshot")]
    unigrams: Option<PathBuf>,

    /// Bigram frequency dictionary (`term1 term2 count` per line)
    #[arg(long, requires = "unigrams")]
    bigrams: Option<PathBuf>,

    /// Snapshot written by build_snapshot, instead of the text dictionaries
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Watch-list file
    #[arg(long, default_value = "data/watchlists.toml")]
    watchlists: PathBuf,

    /// Corrector configuration (TOML); ignored with --snapshot
    #[arg(long)]
    config: Option<PathBuf>,

    /// OCR text to analyze; stdin when omitted or "-"
    #[arg(long)]
    input: Option<PathBuf>,

    /// Edit budget per token; defaults to the configured maximum
    #[arg(long)]
    max_edit_distance: Option<usize>,

    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("reading input {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading input from stdin")?;
            Ok(buf)
        }
    }
}

fn load_corrector(args: &Args) -> Result<Corrector> {
    if let Some(snapshot) = &args.snapshot {
        return Corrector::load_snapshot(snapshot)
            .with_context(|| format!("loading snapshot {}", snapshot.display()));
    }
    let (Some(unigrams), Some(bigrams)) = (&args.unigrams, &args.bigrams) else {
        bail!("either --snapshot or both --unigrams and --bigrams are required");
    };
    let config = match &args.config {
        Some(p) => Config::load_toml(p).with_context(|| format!("loading config {}", p.display()))?,
        None => Config::default(),
    };
    Corrector::load(unigrams, bigrams, &config).context("loading dictionaries")
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let corrector = load_corrector(&args)?;
    let lists = WatchLists::load(&args.watchlists)
        .with_context(|| format!("loading watch-lists {}", args.watchlists.display()))?;
    info!(lists = lists.len(), "watch-lists loaded");

    let raw = join_lines(&read_input(args.input.as_deref())?);
    let max_ed = args
        .max_edit_distance
        .unwrap_or(corrector.config().max_edit_distance);
    let report = AnalysisReport::analyze(&corrector, &lists, &raw, max_ed)
        .context("nothing to analyze; check the OCR output")?;

    match args.format {
        Format::Text => print!("{report}"),
        Format::Json => println!("{}", report.to_json().context("encoding report")?),
    }
    Ok(())
}

// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::config::options::DocKind;
use crate::file::read_document;
use crate::specs::{attributes, facepack, fixtures, history, league, name};

/// Extract typed records from a Football Manager export and print them as JSON.
#[derive(Debug, Parser)]
#[command(name = "cli", version, about)]
pub struct Args {
    /// Which extractor to run
    #[arg(short, long, value_enum)]
    pub kind: DocKind,

    /// Export document to read
    pub file: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Log extraction decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let text = read_document(&args.file)
        .wrap_err_with(|| format!("reading {}", args.file.display()))?;
    logf!("{}: {}", args.kind.title(), args.file.display());

    let json = render(args.kind, &text, args.pretty)?;
    println!("{json}");
    Ok(())
}

/// Run one extractor and serialize its output.
pub fn render(kind: DocKind, text: &str, pretty: bool) -> Result<String> {
    let value = match kind {
        DocKind::Attributes => serde_json::to_value(attributes::extract_attributes(text))?,
        DocKind::Name => serde_json::to_value(name::extract_name(text))?,
        DocKind::History => serde_json::to_value(history::extract_history(text))?,
        DocKind::League => serde_json::to_value(league::extract_league_table(text))?,
        DocKind::Tally => serde_json::to_value(fixtures::extract_season_tally(text))?,
        DocKind::Facepack => serde_json::to_value(facepack::extract_facepack_mapping(text)?)?,
    };
    let out = if pretty { serde_json::to_string_pretty(&value)? } else { serde_json::to_string(&value)? };
    Ok(out)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "fm_import=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess960_book::config;
use chess960_book::export::LichessExporter;
use chess960_book::{book, pipeline};

/// Builds a Chess960 opening-book PGN from the game histories of a roster of
/// strong bot accounts.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Where to write the master PGN.
    #[arg(long, default_value = config::MASTER_PGN)]
    output: PathBuf,

    /// Account to export; repeat for several. Defaults to the built-in bot
    /// roster.
    #[arg(long = "account")]
    accounts: Vec<String>,

    /// Per-account export cap.
    #[arg(long, default_value_t = config::MAX_GAMES_PER_BOT)]
    max_games: u32,

    /// Lichess API token; falls back to the TOKEN environment variable.
    #[arg(long)]
    token: Option<String>,

    /// Book-compiler command to run over the finished PGN, e.g.
    /// "python create_polyglot.py".
    #[arg(long)]
    book_cmd: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("chess960_book=info".parse()?),
        )
        .init();

    let accounts: Vec<String> = if args.accounts.is_empty() {
        config::BOTS.iter().map(|b| b.to_string()).collect()
    } else {
        args.accounts
    };

    let token = args
        .token
        .or_else(|| env::var("TOKEN").ok())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let exporter = LichessExporter::new(config::API_BASE, token, args.max_games)?;
    let outcome = pipeline::run(&exporter, &accounts);

    info!(
        kept = outcome.summary.kept,
        seen = outcome.summary.games_seen,
        duplicates = outcome.summary.duplicates,
        failed_accounts = outcome.summary.failed_accounts,
        "kept games after filtering"
    );

    book::write_master_pgn(&args.output, &outcome.games)
        .with_context(|| format!("writing master PGN to {}", args.output.display()))?;
    info!(path = %args.output.display(), "master PGN saved");

    if let Some(command) = &args.book_cmd {
        info!(command = command.as_str(), "building opening book");
        book::compile_book(command).context("book compilation failed")?;
        info!("book creation complete");
    }

    Ok(())
}

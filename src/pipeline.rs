use std::io::Read;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::aggregate::FenGroups;
use crate::dedup::{self, SeenLines};
use crate::filter;
use crate::trim;
use crate::types::TrimmedGame;
use crate::visitor::GameStream;

/// One account's PGN export as a stream of parsed games.
pub type ExportStream = GameStream<Box<dyn Read + Send>>;

/// Source of per-account game exports. The production implementation talks
/// to the Lichess API; tests feed synthetic PGN through the same seam.
pub trait GameSource {
    fn games(&self, account: &str) -> Result<ExportStream>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub accounts: usize,
    pub failed_accounts: usize,
    pub broken_streams: usize,
    pub games_seen: usize,
    pub eligible: usize,
    pub duplicates: usize,
    pub corrupt: usize,
    pub kept: usize,
}

pub struct CuratedGames {
    pub games: Vec<TrimmedGame>,
    pub summary: RunSummary,
}

/// Runs the whole curation pass: one account at a time in roster order, one
/// game at a time per account. A failed export skips that account only. A
/// game whose recorded moves cannot be replayed against its FEN is dropped
/// with an error; every other drop is ordinary filtering.
pub fn run(source: &dyn GameSource, accounts: &[String]) -> CuratedGames {
    let mut seen = SeenLines::default();
    let mut groups = FenGroups::default();
    let mut summary = RunSummary {
        accounts: accounts.len(),
        ..RunSummary::default()
    };

    for account in accounts {
        info!(account = account.as_str(), "downloading games");

        let stream = match source.games(account) {
            Ok(stream) => stream,
            Err(e) => {
                warn!(account = account.as_str(), error = %e, "export failed, skipping account");
                summary.failed_accounts += 1;
                continue;
            }
        };

        let mut game_no = 0usize;
        for item in stream {
            let game = match item {
                Ok(game) => game,
                Err(e) => {
                    warn!(account = account.as_str(), error = %e, "export stream broke mid-account");
                    summary.broken_streams += 1;
                    break;
                }
            };
            game_no += 1;
            summary.games_seen += 1;

            if !filter::is_eligible(&game) {
                continue;
            }
            summary.eligible += 1;

            let key = match dedup::line_key(&game) {
                Ok(key) => key,
                Err(e) => {
                    error!(account = account.as_str(), game = game_no, error = %e, "dropping game with inconsistent moves");
                    summary.corrupt += 1;
                    continue;
                }
            };
            if !seen.admit(key) {
                summary.duplicates += 1;
                continue;
            }

            let trimmed = match trim::trim_game(&game) {
                Ok(trimmed) => trimmed,
                Err(e) => {
                    error!(account = account.as_str(), game = game_no, error = %e, "dropping game with inconsistent moves");
                    summary.corrupt += 1;
                    continue;
                }
            };

            info!(
                account = account.as_str(),
                game = game_no,
                speed = game.header("Speed"),
                "stored game"
            );
            groups.add(game.header("FEN"), trimmed);
        }
    }

    let games = groups.finalize();
    summary.kept = games.len();
    CuratedGames { games, summary }
}

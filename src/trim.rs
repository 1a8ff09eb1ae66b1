use crate::config::MAX_PLIES;
use crate::error::NotationError;
use crate::notation;
use crate::types::{RawGame, TrimmedGame};

/// Cuts an accepted game down to its opening prefix.
///
/// Headers are carried over verbatim (the `FEN` tag keeps the starting
/// position), moves are replayed from that position and kept up to
/// `MAX_PLIES` plies. Replay failure on an already-eligible game means the
/// export data is inconsistent and is reported, never papered over.
pub fn trim_game(game: &RawGame) -> Result<TrimmedGame, NotationError> {
    let moves = notation::replay(game.header("FEN"), &game.moves, Some(MAX_PLIES))?;
    Ok(TrimmedGame {
        headers: game.headers.clone(),
        moves,
    })
}

use std::collections::HashSet;

use crate::error::NotationError;
use crate::notation;
use crate::types::RawGame;

/// Identity of a recorded game: starting position plus the full rendered
/// mainline. Keyed on the untrimmed line on purpose, so games that agree for
/// the stored opening prefix but diverge later stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub fen: String,
    pub line: String,
}

/// Derives the dedup key for a game from its declared starting position.
pub fn line_key(game: &RawGame) -> Result<LineKey, NotationError> {
    let fen = game.header("FEN").to_string();
    let line = notation::san_line(&fen, &game.moves)?;
    Ok(LineKey { fen, line })
}

/// Every line admitted so far in this run. Append-only; dropped with the run.
#[derive(Debug, Default)]
pub struct SeenLines(HashSet<LineKey>);

impl SeenLines {
    /// Records the key and reports whether it was new.
    pub fn admit(&mut self, key: LineKey) -> bool {
        self.0.insert(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

use std::collections::HashMap;

use crate::config::MIN_FEN_GAMES;
use crate::types::TrimmedGame;

/// Accepted games grouped by starting position.
///
/// Group order is first-seen order of each FEN; games within a group keep
/// insertion order. `finalize` consumes the collection, so nothing can be
/// added once the dataset has been produced.
#[derive(Debug, Default)]
pub struct FenGroups {
    order: Vec<String>,
    groups: HashMap<String, Vec<TrimmedGame>>,
}

impl FenGroups {
    pub fn add(&mut self, fen: &str, game: TrimmedGame) {
        if !self.groups.contains_key(fen) {
            self.order.push(fen.to_string());
        }
        self.groups.entry(fen.to_string()).or_default().push(game);
    }

    /// Number of games added so far.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Flattens the groups with enough supporting games into the final
    /// dataset: FENs in first-seen order, games in insertion order. Groups
    /// below `MIN_FEN_GAMES` are dropped wholesale.
    pub fn finalize(self) -> Vec<TrimmedGame> {
        let mut groups = self.groups;
        let mut dataset = Vec::new();

        for fen in self.order {
            let Some(games) = groups.remove(&fen) else {
                continue;
            };
            if games.len() >= MIN_FEN_GAMES {
                dataset.extend(games);
            }
        }

        dataset
    }
}

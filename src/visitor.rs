use std::io::{self, Read};
use std::mem;
use std::ops::ControlFlow;

use pgn_reader::{Outcome, RawTag, Reader, SanPlus, Skip, Visitor};

use crate::types::{RawGame, SanLine};

/// Streaming PGN visitor (pgn-reader).
///
/// Collects every tag pair verbatim in first-seen order (the first value wins
/// on duplicated tags) and the mainline SAN tokens. Variations are skipped;
/// comments and NAGs are dropped. When a game carries no `Result` tag the
/// movetext terminator is used as a fallback.
pub struct GameVisitor {
    headers: Vec<(String, String)>,
    moves: SanLine,
    result_marker: Option<String>,
    pub current_game: Option<RawGame>,
}

impl GameVisitor {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            moves: SanLine::new(),
            result_marker: None,
            current_game: None,
        }
    }

    fn finalize_game(&mut self) {
        let has_result = self.headers.iter().any(|(k, _)| k == "Result");
        if !has_result
            && let Some(marker) = self.result_marker.take()
        {
            self.headers.push(("Result".to_string(), marker));
        }

        self.current_game = Some(RawGame {
            headers: mem::take(&mut self.headers),
            moves: mem::take(&mut self.moves),
        });
    }
}

impl Default for GameVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for GameVisitor {
    type Tags = ();
    type Movetext = ();
    type Output = ();

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        self.headers.clear();
        self.moves.clear();
        self.result_marker = None;
        self.current_game = None;
        ControlFlow::Continue(())
    }

    fn tag(
        &mut self,
        _: &mut Self::Tags,
        key: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        let key = String::from_utf8_lossy(key);
        if self.headers.iter().any(|(k, _)| *k == key) {
            return ControlFlow::Continue(());
        }

        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        self.headers.push((key.into_owned(), value));
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, _: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(())
    }

    fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn san(&mut self, _: &mut Self::Movetext, san: SanPlus) -> ControlFlow<Self::Output> {
        self.moves.push(san.to_string());
        ControlFlow::Continue(())
    }

    fn outcome(&mut self, _: &mut Self::Movetext, outcome: Outcome) -> ControlFlow<Self::Output> {
        self.result_marker = Some(outcome.to_string());
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, _: Self::Movetext) -> Self::Output {
        self.finalize_game();
    }
}

/// Iterator over the games of one PGN export.
///
/// Wraps a `pgn_reader::Reader` over any byte source, yielding one `RawGame`
/// per record until the source is exhausted. A read error ends the stream.
pub struct GameStream<R> {
    reader: Reader<R>,
    visitor: GameVisitor,
}

impl<R: Read> GameStream<R> {
    pub fn new(input: R) -> Self {
        Self {
            reader: Reader::new(input),
            visitor: GameVisitor::new(),
        }
    }
}

impl<R: Read> Iterator for GameStream<R> {
    type Item = io::Result<RawGame>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_game(&mut self.visitor) {
                Ok(Some(())) => {
                    if let Some(game) = self.visitor.current_game.take() {
                        return Some(Ok(game));
                    }
                }
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(pgn: &str) -> RawGame {
        let mut reader = Reader::new(pgn.as_bytes());
        let mut visitor = GameVisitor::new();

        reader.read_game(&mut visitor).unwrap();

        visitor.current_game.expect("Should have parsed a game")
    }

    #[test]
    fn test_visitor_collects_headers_and_moves() {
        let pgn = r#"[Event "Rated Chess960 game"]
[Variant "Chess960"]
[Result "1-0"]
1. e4 e5 2. Nf3 1-0"#;

        let game = parse_one(pgn);
        assert_eq!(game.header("Event"), "Rated Chess960 game");
        assert_eq!(game.header("Variant"), "Chess960");
        assert_eq!(game.header("Result"), "1-0");
        assert_eq!(game.moves.as_slice(), ["e4", "e5", "Nf3"]);
    }

    #[test]
    fn test_visitor_preserves_header_order_and_first_value() {
        let pgn = r#"[Event "First"]
[Site "lichess.org"]
[Event "Second"]
1. d4 1-0"#;

        let game = parse_one(pgn);
        assert_eq!(
            game.headers,
            vec![
                ("Event".to_string(), "First".to_string()),
                ("Site".to_string(), "lichess.org".to_string()),
            ]
        );
    }

    #[test]
    fn test_visitor_skips_variations_and_comments() {
        let pgn = r#"[Event "Noise"]
1. e4 { best by test } (1. d4 d5) e5 2. Nf3 1-0"#;

        let game = parse_one(pgn);
        assert_eq!(game.moves.as_slice(), ["e4", "e5", "Nf3"]);
    }

    #[test]
    fn test_visitor_result_falls_back_to_terminator() {
        let pgn = r#"[Event "No result tag"]
1. e4 e5 0-1"#;

        let game = parse_one(pgn);
        assert_eq!(game.header("Result"), "0-1");
    }

    #[test]
    fn test_visitor_empty_movetext() {
        let pgn = r#"[Event "Empty"]
[Result "*"]
*"#;

        let game = parse_one(pgn);
        assert!(game.moves.is_empty());
        assert_eq!(game.header("Result"), "*");
    }

    #[test]
    fn test_stream_yields_every_game() {
        let pgn = r#"[Event "One"]
1. e4 1-0

[Event "Two"]
1. d4 0-1
"#;

        let games: Vec<RawGame> = GameStream::new(pgn.as_bytes())
            .collect::<io::Result<Vec<_>>>()
            .unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].header("Event"), "One");
        assert_eq!(games[1].header("Event"), "Two");
    }

    #[test]
    fn test_stream_empty_input() {
        let games: Vec<io::Result<RawGame>> = GameStream::new("".as_bytes()).collect();
        assert!(games.is_empty());
    }
}

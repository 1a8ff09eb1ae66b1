use std::fmt::Write;

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{CastlingMode, Chess};

use crate::error::NotationError;
use crate::types::SanLine;

/// Sets up the position a game's `FEN` tag declares. Chess960 castling
/// notation throughout, which also covers the standard start.
pub fn starting_position(fen: &str) -> Result<Chess, NotationError> {
    let parsed: Fen = fen.parse().map_err(|e: shakmaty::fen::ParseFenError| {
        NotationError::BadFen {
            fen: fen.to_string(),
            message: e.to_string(),
        }
    })?;

    parsed
        .into_position(CastlingMode::Chess960)
        .map_err(|e| NotationError::BadFen {
            fen: fen.to_string(),
            message: e.to_string(),
        })
}

/// Replays `sans` from `fen`, returning the first `limit` plies re-rendered
/// in canonical SAN (all plies when `limit` is `None`). An unparsable or
/// illegal token is an error, not a truncation point.
pub fn replay(fen: &str, sans: &[String], limit: Option<usize>) -> Result<SanLine, NotationError> {
    let mut pos = starting_position(fen)?;
    let take = limit.unwrap_or(sans.len());

    let mut rendered = SanLine::new();
    for (ply, token) in sans.iter().take(take).enumerate() {
        let san: SanPlus = token
            .parse()
            .map_err(|e: shakmaty::san::ParseSanError| NotationError::BadMove {
                san: token.clone(),
                ply,
                message: e.to_string(),
            })?;

        let m = san.san.to_move(&pos).map_err(|e| NotationError::BadMove {
            san: token.clone(),
            ply,
            message: e.to_string(),
        })?;

        rendered.push(SanPlus::from_move_and_play_unchecked(&mut pos, m).to_string());
    }

    Ok(rendered)
}

/// The full mainline as one numbered string relative to the starting
/// position, e.g. `1. e4 e5 2. Nf3`. This is what identifies a recorded line.
pub fn san_line(fen: &str, sans: &[String]) -> Result<String, NotationError> {
    Ok(format_movetext(&replay(fen, sans, None)?))
}

/// Renders SAN tokens with move numbers before each white move.
pub fn format_movetext(tokens: &[String]) -> String {
    let mut out = String::new();
    for (ply, token) in tokens.iter().enumerate() {
        if !out.is_empty() {
            out.push(' ');
        }
        if ply.is_multiple_of(2) {
            let _ = write!(out, "{}. ", ply / 2 + 1);
        }
        out.push_str(token);
    }
    out
}

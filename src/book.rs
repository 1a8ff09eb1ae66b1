use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::Command;

use crate::error::BookError;
use crate::notation;
use crate::types::TrimmedGame;

/// Writes the curated dataset as one concatenated PGN file.
pub fn write_master_pgn(path: &Path, games: &[TrimmedGame]) -> Result<(), BookError> {
    let mut out = BufWriter::new(File::create(path)?);
    for game in games {
        write_game(&mut out, game)?;
    }
    out.flush()?;
    Ok(())
}

fn write_game<W: Write>(out: &mut W, game: &TrimmedGame) -> io::Result<()> {
    for (key, value) in &game.headers {
        writeln!(out, "[{} \"{}\"]", key, escape_tag_value(value))?;
    }
    writeln!(out)?;

    let movetext = notation::format_movetext(&game.moves);
    let marker = match game.header("Result") {
        "" => "*",
        result => result,
    };
    if movetext.is_empty() {
        writeln!(out, "{marker}")?;
    } else {
        writeln!(out, "{movetext} {marker}")?;
    }
    writeln!(out)
}

fn escape_tag_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Runs the configured book-compiler command over the finished master file.
/// The command is split on whitespace; a non-zero exit is an error since the
/// book is the point of the whole run.
pub fn compile_book(command: &str) -> Result<(), BookError> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(BookError::EmptyCommand);
    };

    let status = Command::new(program)
        .args(parts)
        .status()
        .map_err(|e| BookError::Spawn {
            command: command.to_string(),
            source: e,
        })?;

    if !status.success() {
        return Err(BookError::Compiler {
            command: command.to_string(),
            status,
        });
    }
    Ok(())
}

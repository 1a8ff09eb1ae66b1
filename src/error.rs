use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Replay of a recorded move line against its declared starting position
/// failed. On a game that already passed eligibility this means corrupt
/// export data, so it is surfaced instead of producing a bad record.
#[derive(Debug, Error)]
pub enum NotationError {
    #[error("invalid FEN '{fen}': {message}")]
    BadFen { fen: String, message: String },

    #[error("bad move '{san}' at ply {ply}: {message}")]
    BadMove {
        san: String,
        ply: usize,
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum BookError {
    #[error("writing master PGN: {0}")]
    Io(#[from] io::Error),

    #[error("book command is empty")]
    EmptyCommand,

    #[error("failed to spawn book command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("book command '{command}' exited with {status}")]
    Compiler { command: String, status: ExitStatus },
}

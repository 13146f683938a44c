//! Error types for gridwalk.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up or driving a game.
///
/// Nothing inside a running simulation fails; collisions and blocked moves
/// are ordinary state transitions. These errors only come from loading a map
/// and from terminal I/O.
#[derive(Debug, Error)]
pub enum GameError {
    /// The map file could not be read.
    #[error("failed to read map {}: {source}", .path.display())]
    MapRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The map has no player start glyph.
    #[error("map has no player start position")]
    MissingPlayer,
    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Result type for game setup and I/O.
pub type GameResult<T> = Result<T, GameError>;

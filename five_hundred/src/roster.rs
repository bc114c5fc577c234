//! Player roster loading.
//!
//! The roster is a plain text file with one player name per line.

use crate::tournament::Player;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Roster errors
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file could not be read
    #[error("Failed to read players from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The roster file holds no names
    #[error("No players listed in {path}")]
    Empty { path: PathBuf },
}

/// Parse newline-delimited player names. Names are trimmed and blank
/// lines are skipped.
pub fn parse_players(contents: &str) -> Vec<Player> {
    contents
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load the roster from a file
///
/// # Errors
///
/// Returns `Read` if the file cannot be read and `Empty` if it lists no one.
pub async fn load_players(path: impl AsRef<Path>) -> Result<Vec<Player>, RosterError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RosterError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let players = parse_players(&contents);
    if players.is_empty() {
        return Err(RosterError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::debug!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

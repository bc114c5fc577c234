//! Tournament error types.

use thiserror::Error;

/// Tournament errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TournamentError {
    /// No seating in the current round has this exact role assignment
    #[error("Couldn't find a seating with these players: N {north}, S {south}, W {west}, E {east}")]
    SeatingNotFound {
        north: String,
        south: String,
        west: String,
        east: String,
    },

    /// Advancement attempted while scores are still outstanding
    #[error("Round {round} not finished: {outstanding} seating(s) still open")]
    RoundNotFinished { round: usize, outstanding: usize },

    /// The roster does not fill the tables exactly
    #[error("Invalid configuration: {players} players cannot fill {tables} table(s) of four")]
    ConfigurationInvalid { players: usize, tables: usize },
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;

//! # Five Hundred
//!
//! Score tracking for multi-round, multi-table Five Hundred tournaments.
//!
//! A tournament seats a fixed roster at a fixed set of four-player tables.
//! Every round reshuffles the roster across the tables; once every table
//! has reported its north-south and west-east scores, the next round is
//! seated automatically.
//!
//! ## Lifecycle
//!
//! - **Round n active**: tables are playing, scores arrive one table at a time
//! - **Round n finished**: the last outstanding table reported
//! - **Round n+1 active**: a new seating of the whole roster
//!
//! ## Core Modules
//!
//! - [`tournament`]: seatings, rounds, seating policies and tournament state
//! - [`roster`]: loading the player list
//!
//! ## Example
//!
//! ```
//! use five_hundred::TournamentState;
//!
//! let players = (1..=8).map(|i| format!("Player {i}")).collect();
//! let tables = vec!["T1".to_string(), "T2".to_string()];
//! let state = TournamentState::new(3, players, tables).unwrap();
//!
//! assert_eq!(state.current_round_number(), 1);
//! assert_eq!(state.current_round().seatings.len(), 2);
//! ```

/// Player roster loading.
pub mod roster;
pub use roster::{RosterError, load_players, parse_players};

/// Seating, rounds and tournament state.
pub mod tournament;
pub use tournament::{
    RandomSeating, Round, ScoreSubmission, Seating, SeatingPolicy, StateSnapshot,
    TournamentError, TournamentManager, TournamentResult, TournamentState,
};

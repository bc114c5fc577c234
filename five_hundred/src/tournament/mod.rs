//! Tournament module: round-robin table seating and score tracking.
//!
//! This module provides:
//! - Seating and round models with completion checks
//! - A replaceable seating policy (uniform random by default)
//! - Tournament state with score recording and round advancement
//! - A lock-guarded manager shared between request handlers
//!
//! ## Example
//!
//! ```
//! use five_hundred::tournament::{ScoreSubmission, TournamentManager, TournamentState};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let players = ["Ann", "Bob", "Cat", "Dan"].map(String::from).to_vec();
//! let state = TournamentState::new(3, players, vec!["T1".to_string()])?;
//! let manager = TournamentManager::new(state);
//!
//! let snapshot = manager.snapshot().await;
//! let seating = &snapshot.rounds[0].seatings[0];
//! let submission = ScoreSubmission {
//!     north: seating.north.clone(),
//!     south: seating.south.clone(),
//!     west: seating.west.clone(),
//!     east: seating.east.clone(),
//!     ns_score: 240,
//!     we_score: -100,
//! };
//!
//! // The only table finished, so round 2 has been seated
//! let recorded = manager.record_score(&submission).await?;
//! assert!(recorded.advanced);
//! assert_eq!(recorded.snapshot.round, 2);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod seating;
pub mod state;

pub use errors::{TournamentError, TournamentResult};
pub use manager::{ScoreRecorded, TournamentManager};
pub use models::{
    Player, PlayerScores, Round, ScoreSubmission, Seating, StateSnapshot, TableName,
};
pub use seating::{RandomSeating, SEATS_PER_TABLE, SeatingPolicy};
pub use state::TournamentState;

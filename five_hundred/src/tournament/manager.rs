//! Tournament manager: the shared, lock-guarded handle to a running tournament.

use super::{
    errors::TournamentResult,
    models::{ScoreSubmission, StateSnapshot},
    state::TournamentState,
};
use log::info;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Result of a recorded score
#[derive(Debug, Clone)]
pub struct ScoreRecorded {
    /// Whether the score completed the round and a new one was seated
    pub advanced: bool,
    /// State after the submission
    pub snapshot: StateSnapshot,
}

/// Shared handle to a [`TournamentState`].
///
/// Every read and write goes through one lock. Recording a score, the
/// automatic round advance it may trigger, and the snapshot returned to
/// the caller all happen under a single write guard, so readers never see
/// a finished round without its successor.
#[derive(Clone)]
pub struct TournamentManager {
    state: Arc<RwLock<TournamentState>>,
}

impl TournamentManager {
    /// Create a new tournament manager
    pub fn new(state: TournamentState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Snapshot of the full tournament for reporting
    pub async fn snapshot(&self) -> StateSnapshot {
        self.state.read().await.snapshot()
    }

    /// Current 1-based round number
    pub async fn current_round_number(&self) -> usize {
        self.state.read().await.current_round_number()
    }

    /// A single player's completed scores
    pub async fn scores(&self, player: &str) -> Vec<i32> {
        self.state.read().await.scores(player)
    }

    /// Record a score, advance the round if it is now complete, and return
    /// the resulting state.
    ///
    /// # Errors
    ///
    /// Returns `SeatingNotFound` when the submission matches no seating of
    /// the current round; the state is left untouched.
    pub async fn record_score(
        &self,
        submission: &ScoreSubmission,
    ) -> TournamentResult<ScoreRecorded> {
        let mut state = self.state.write().await;
        let advanced = state.record_score(submission)?;

        if advanced {
            info!(
                "Round {} complete, round {} seated",
                state.current_round_number() - 1,
                state.current_round_number()
            );
        }

        Ok(ScoreRecorded {
            advanced,
            snapshot: state.snapshot(),
        })
    }
}

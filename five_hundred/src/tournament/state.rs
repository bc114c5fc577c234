//! Tournament state: roster, tables and the round history.

use super::{
    errors::{TournamentError, TournamentResult},
    models::{Player, PlayerScores, Round, ScoreSubmission, StateSnapshot, TableName},
    seating::{RandomSeating, SEATS_PER_TABLE, SeatingPolicy},
};
use log::{debug, info};
use std::fmt;

/// Single source of truth for a running tournament.
///
/// The history always holds at least one round and only grows, one round
/// at a time, once the current round is finished. Roster and tables are
/// fixed at construction.
pub struct TournamentState {
    /// Advisory number of rounds to play
    total_rounds: usize,
    players: Vec<Player>,
    tables: Vec<TableName>,
    rounds: Vec<Round>,
    policy: Box<dyn SeatingPolicy>,
}

impl TournamentState {
    /// Create a tournament seated by [`RandomSeating`]
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationInvalid` unless there is at least one table
    /// and exactly four players per table.
    pub fn new(
        total_rounds: usize,
        players: Vec<Player>,
        tables: Vec<TableName>,
    ) -> TournamentResult<Self> {
        Self::with_policy(
            total_rounds,
            players,
            tables,
            Box::new(RandomSeating::new()),
        )
    }

    /// Create a tournament with a custom seating policy
    pub fn with_policy(
        total_rounds: usize,
        players: Vec<Player>,
        tables: Vec<TableName>,
        mut policy: Box<dyn SeatingPolicy>,
    ) -> TournamentResult<Self> {
        if tables.is_empty() || players.len() != SEATS_PER_TABLE * tables.len() {
            return Err(TournamentError::ConfigurationInvalid {
                players: players.len(),
                tables: tables.len(),
            });
        }

        let first = Round::new(policy.assign(&players, &tables, &[]));
        info!(
            "Tournament created: {} players, {} tables, {} rounds, {} seating",
            players.len(),
            tables.len(),
            total_rounds,
            policy.name()
        );

        Ok(Self {
            total_rounds,
            players,
            tables,
            rounds: vec![first],
            policy,
        })
    }

    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn tables(&self) -> &[TableName] {
        &self.tables
    }

    /// Round history, oldest first
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The round currently being played (the last one in history)
    pub fn current_round(&self) -> &Round {
        self.rounds
            .last()
            .expect("tournament always holds at least one round")
    }

    fn current_round_mut(&mut self) -> &mut Round {
        self.rounds
            .last_mut()
            .expect("tournament always holds at least one round")
    }

    /// 1-based number of the current round. Not capped by `total_rounds`.
    pub fn current_round_number(&self) -> usize {
        self.rounds.len()
    }

    /// Record an outcome for the current round's seating with exactly
    /// these roles. Re-submitting overwrites the earlier outcome.
    ///
    /// # Errors
    ///
    /// Returns `SeatingNotFound` (and changes nothing) when no seating in
    /// the current round matches.
    pub fn apply_score(
        &mut self,
        north: &str,
        south: &str,
        west: &str,
        east: &str,
        ns_score: i32,
        we_score: i32,
    ) -> TournamentResult<()> {
        let round = self.rounds.len();
        let seating = self
            .current_round_mut()
            .find_seating_mut(north, south, west, east)
            .ok_or_else(|| TournamentError::SeatingNotFound {
                north: north.to_string(),
                south: south.to_string(),
                west: west.to_string(),
                east: east.to_string(),
            })?;

        if seating.finished {
            info!(
                "Round {}, table {}: overwriting {}-{} with {}-{}",
                round, seating.table_name, seating.ns_score, seating.we_score, ns_score, we_score
            );
        }
        seating.record(ns_score, we_score);
        debug!(
            "Round {}, table {}: NS {} vs WE {}",
            round, seating.table_name, ns_score, we_score
        );

        Ok(())
    }

    /// Start the next round with a fresh assignment of the whole roster.
    ///
    /// # Errors
    ///
    /// Returns `RoundNotFinished` (and changes nothing) while any seating
    /// of the current round lacks a score.
    pub fn advance_round(&mut self) -> TournamentResult<()> {
        let current = self.current_round();
        if !current.finished() {
            return Err(TournamentError::RoundNotFinished {
                round: self.current_round_number(),
                outstanding: current.outstanding(),
            });
        }

        let seatings = self
            .policy
            .assign(&self.players, &self.tables, &self.rounds);
        self.rounds.push(Round::new(seatings));
        info!("Advanced to round {}", self.current_round_number());

        if self.finished_rounds() == self.total_rounds {
            info!("All {} scheduled rounds have been played", self.total_rounds);
        }

        Ok(())
    }

    /// Apply a submission and, if that completes the round, start the next
    /// one. Returns whether a new round was started.
    pub fn record_score(&mut self, submission: &ScoreSubmission) -> TournamentResult<bool> {
        self.apply_score(
            &submission.north,
            &submission.south,
            &submission.west,
            &submission.east,
            submission.ns_score,
            submission.we_score,
        )?;

        if !self.current_round().finished() {
            return Ok(false);
        }

        self.advance_round()?;
        Ok(true)
    }

    /// The player's partnership scores, one per round, from the first round
    /// up to (not including) the first round where the player's seating is
    /// unfinished.
    pub fn scores(&self, player: &str) -> Vec<i32> {
        self.rounds
            .iter()
            .map_while(|round| {
                round
                    .seating_for(player)
                    .and_then(|seating| seating.partnership_score(player))
            })
            .collect()
    }

    /// Number of rounds with every score recorded
    pub fn finished_rounds(&self) -> usize {
        self.rounds.iter().filter(|round| round.finished()).count()
    }

    /// Whether the scheduled number of rounds has been played. Advisory:
    /// play may continue past the target.
    pub fn target_reached(&self) -> bool {
        self.finished_rounds() >= self.total_rounds
    }

    /// Copy of the full state for reporting
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            round: self.current_round_number(),
            total_rounds: self.total_rounds,
            scores: self
                .players
                .iter()
                .map(|player| PlayerScores {
                    player: player.clone(),
                    scores: self.scores(player),
                })
                .collect(),
            rounds: self.rounds.clone(),
        }
    }
}

impl fmt::Debug for TournamentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TournamentState")
            .field("total_rounds", &self.total_rounds)
            .field("players", &self.players)
            .field("tables", &self.tables)
            .field("rounds", &self.rounds)
            .field("policy", &self.policy.name())
            .finish()
    }
}

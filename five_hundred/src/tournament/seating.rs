//! Seating policies: how a new round assigns the roster to tables.

use super::models::{Player, Round, Seating, TableName};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Players seated at each table
pub const SEATS_PER_TABLE: usize = 4;

/// Strategy that builds the seatings of a new round.
///
/// Implementations receive the full round history so that pairing
/// policies (e.g. moving losers between tables) can be added without
/// touching `Round` or `TournamentState`.
///
/// Callers guarantee `players.len() == SEATS_PER_TABLE * tables.len()`.
pub trait SeatingPolicy: Send + Sync {
    /// Produce one seating per table, in table order, covering every
    /// player exactly once.
    fn assign(
        &mut self,
        players: &[Player],
        tables: &[TableName],
        history: &[Round],
    ) -> Vec<Seating>;

    /// Short policy name for logs
    fn name(&self) -> &'static str;
}

/// Uniform random seating, independent of earlier rounds.
pub struct RandomSeating {
    /// Generator seeded once and reused for every round
    rng: StdRng,
}

impl RandomSeating {
    /// Create a policy seeded from operating system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic policy, for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fisher-Yates shuffle: walk down from the last index, swapping each
    /// element with a uniformly chosen one at or below it.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.random_range(0..=i);
            items.swap(i, j);
        }
    }
}

impl Default for RandomSeating {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatingPolicy for RandomSeating {
    fn assign(
        &mut self,
        players: &[Player],
        tables: &[TableName],
        _history: &[Round],
    ) -> Vec<Seating> {
        let mut roster = players.to_vec();
        self.shuffle(&mut roster);
        seat_in_order(&roster, tables)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Seat consecutive groups of four as north, south, west, east of
/// successive tables.
pub fn seat_in_order(roster: &[Player], tables: &[TableName]) -> Vec<Seating> {
    roster
        .chunks_exact(SEATS_PER_TABLE)
        .zip(tables)
        .map(|(seats, table)| {
            Seating::new(
                table.clone(),
                seats[0].clone(),
                seats[1].clone(),
                seats[2].clone(),
                seats[3].clone(),
            )
        })
        .collect()
}

//! Tournament data models: seatings, rounds and the reporting snapshot.
//!
//! Field names on the wire follow the tracker's JSON contract
//! (`TableName`, `NSScore`, `Seatings`, ...), so every model renames its
//! fields to PascalCase.

use serde::{Deserialize, Serialize};

/// Player identifier (the player's name as listed in the roster)
pub type Player = String;

/// Table identifier
pub type TableName = String;

/// One table's four assigned players for a round, plus the recorded outcome.
///
/// An unfinished seating carries zeroed scores and `ns_wins == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Seating {
    /// Table hosting this seating
    pub table_name: TableName,
    pub north: Player,
    pub south: Player,
    pub west: Player,
    pub east: Player,

    /// Whether a score has been recorded
    pub finished: bool,
    /// North-south partnership score
    #[serde(rename = "NSScore")]
    pub ns_score: i32,
    /// West-east partnership score
    #[serde(rename = "WEScore")]
    pub we_score: i32,
    /// North-south won (ties go to north-south)
    #[serde(rename = "NSWins")]
    pub ns_wins: bool,
}

impl Seating {
    /// Create an unfinished seating
    pub fn new(
        table_name: impl Into<TableName>,
        north: impl Into<Player>,
        south: impl Into<Player>,
        west: impl Into<Player>,
        east: impl Into<Player>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            north: north.into(),
            south: south.into(),
            west: west.into(),
            east: east.into(),
            finished: false,
            ns_score: 0,
            we_score: 0,
            ns_wins: false,
        }
    }

    /// Seat occupants in north, south, west, east order
    pub fn players(&self) -> [&str; 4] {
        [&self.north, &self.south, &self.west, &self.east]
    }

    /// Exact role match. Swapping two players is a different seating.
    pub fn is_seated(&self, north: &str, south: &str, west: &str, east: &str) -> bool {
        self.north == north && self.south == south && self.west == west && self.east == east
    }

    /// Whether the player sits anywhere at this table
    pub fn contains(&self, player: &str) -> bool {
        self.players().contains(&player)
    }

    /// Record an outcome, replacing any earlier one.
    pub fn record(&mut self, ns_score: i32, we_score: i32) {
        self.finished = true;
        self.ns_score = ns_score;
        self.we_score = we_score;
        self.ns_wins = ns_score >= we_score;
    }

    /// The score credited to the player's partnership, if this seating is
    /// finished and the player sits here.
    pub fn partnership_score(&self, player: &str) -> Option<i32> {
        if !self.finished {
            return None;
        }

        if self.north == player || self.south == player {
            Some(self.ns_score)
        } else if self.west == player || self.east == player {
            Some(self.we_score)
        } else {
            None
        }
    }
}

/// All seatings of one round, one per table in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Round {
    pub seatings: Vec<Seating>,
}

impl Round {
    pub fn new(seatings: Vec<Seating>) -> Self {
        Self { seatings }
    }

    /// True when every seating has a score. Vacuously true for no seatings.
    pub fn finished(&self) -> bool {
        self.seatings.iter().all(|seating| seating.finished)
    }

    /// Number of seatings still waiting for a score
    pub fn outstanding(&self) -> usize {
        self.seatings.iter().filter(|seating| !seating.finished).count()
    }

    /// Find the seating with exactly this role assignment
    pub fn find_seating(
        &self,
        north: &str,
        south: &str,
        west: &str,
        east: &str,
    ) -> Option<&Seating> {
        self.seatings
            .iter()
            .find(|seating| seating.is_seated(north, south, west, east))
    }

    pub fn find_seating_mut(
        &mut self,
        north: &str,
        south: &str,
        west: &str,
        east: &str,
    ) -> Option<&mut Seating> {
        self.seatings
            .iter_mut()
            .find(|seating| seating.is_seated(north, south, west, east))
    }

    /// The seating a player was assigned to in this round
    pub fn seating_for(&self, player: &str) -> Option<&Seating> {
        self.seatings.iter().find(|seating| seating.contains(player))
    }
}

/// Score submission for one seating of the current round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScoreSubmission {
    pub north: Player,
    pub south: Player,
    pub west: Player,
    pub east: Player,
    #[serde(rename = "NSScore")]
    pub ns_score: i32,
    #[serde(rename = "WEScore")]
    pub we_score: i32,
}

/// A player's completed results, in round order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerScores {
    pub player: Player,
    pub scores: Vec<i32>,
}

/// Read-only copy of the whole tournament, as reported to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StateSnapshot {
    /// Current (1-based) round number
    pub round: usize,
    /// Advisory number of rounds to play
    pub total_rounds: usize,
    /// Per-player results in roster order
    pub scores: Vec<PlayerScores>,
    /// Full round history, oldest first
    pub rounds: Vec<Round>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seating() -> Seating {
        Seating::new("T1", "Ann", "Bob", "Cat", "Dan")
    }

    #[test]
    fn test_new_seating_is_unfinished() {
        let seating = seating();
        assert!(!seating.finished);
        assert_eq!(seating.ns_score, 0);
        assert_eq!(seating.we_score, 0);
        assert!(!seating.ns_wins);
        assert_eq!(seating.players(), ["Ann", "Bob", "Cat", "Dan"]);
    }

    #[test]
    fn test_record_sets_winner() {
        let mut seating = seating();

        seating.record(8, 5);
        assert!(seating.finished);
        assert!(seating.ns_wins);

        seating.record(-10, 5);
        assert_eq!(seating.ns_score, -10);
        assert_eq!(seating.we_score, 5);
        assert!(!seating.ns_wins, "Re-submission must recompute the winner");
    }

    #[test]
    fn test_tie_goes_to_north_south() {
        let mut seating = seating();
        seating.record(7, 7);
        assert!(seating.ns_wins);
    }

    #[test]
    fn test_role_match_is_order_sensitive() {
        let seating = seating();
        assert!(seating.is_seated("Ann", "Bob", "Cat", "Dan"));
        assert!(!seating.is_seated("Bob", "Ann", "Cat", "Dan"));
        assert!(!seating.is_seated("Ann", "Bob", "Dan", "Cat"));
    }

    #[test]
    fn test_partnership_score() {
        let mut seating = seating();
        assert_eq!(seating.partnership_score("Ann"), None);

        seating.record(120, -40);
        assert_eq!(seating.partnership_score("Ann"), Some(120));
        assert_eq!(seating.partnership_score("Bob"), Some(120));
        assert_eq!(seating.partnership_score("Cat"), Some(-40));
        assert_eq!(seating.partnership_score("Dan"), Some(-40));
        assert_eq!(seating.partnership_score("Eve"), None);
    }

    #[test]
    fn test_round_finished() {
        assert!(Round::default().finished());

        let mut round = Round::new(vec![
            seating(),
            Seating::new("T2", "Eve", "Fay", "Gus", "Hal"),
        ]);
        assert!(!round.finished());
        assert_eq!(round.outstanding(), 2);

        round.seatings[0].record(1, 2);
        assert!(!round.finished());
        assert_eq!(round.outstanding(), 1);

        round.seatings[1].record(3, 4);
        assert!(round.finished());
    }

    #[test]
    fn test_find_seating() {
        let round = Round::new(vec![
            seating(),
            Seating::new("T2", "Eve", "Fay", "Gus", "Hal"),
        ]);

        let found = round.find_seating("Eve", "Fay", "Gus", "Hal");
        assert_eq!(found.map(|s| s.table_name.as_str()), Some("T2"));
        assert!(round.find_seating("Fay", "Eve", "Gus", "Hal").is_none());
        assert_eq!(
            round.seating_for("Cat").map(|s| s.table_name.as_str()),
            Some("T1")
        );
        assert!(round.seating_for("Zed").is_none());
    }

    #[test]
    fn test_seating_wire_names() {
        let value = serde_json::to_value(seating()).unwrap();
        for key in [
            "TableName", "North", "South", "West", "East", "Finished", "NSScore", "WEScore",
            "NSWins",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_score_submission_from_json() {
        let submission: ScoreSubmission = serde_json::from_str(
            r#"{"North":"Ann","South":"Bob","West":"Cat","East":"Dan","NSScore":8,"WEScore":5}"#,
        )
        .unwrap();
        assert_eq!(submission.north, "Ann");
        assert_eq!(submission.ns_score, 8);
        assert_eq!(submission.we_score, 5);
    }
}

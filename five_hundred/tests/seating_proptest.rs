/// Property-based tests for round seating using proptest
///
/// These tests verify that every generated round seats the whole roster
/// exactly once, for any table count and any seed.
use five_hundred::tournament::{RandomSeating, SEATS_PER_TABLE, SeatingPolicy, TournamentState};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn roster(tables: usize) -> (Vec<String>, Vec<String>) {
    let players = (0..tables * SEATS_PER_TABLE)
        .map(|i| format!("player{i}"))
        .collect();
    let tables = (1..=tables).map(|i| format!("T{i}")).collect();
    (players, tables)
}

proptest! {
    #[test]
    fn test_round_seats_everyone_once(table_count in 1usize..=12, seed in any::<u64>()) {
        let (players, tables) = roster(table_count);
        let seatings = RandomSeating::seeded(seed).assign(&players, &tables, &[]);

        prop_assert_eq!(seatings.len(), table_count);

        let mut seen = BTreeSet::new();
        for (seating, table) in seatings.iter().zip(&tables) {
            prop_assert_eq!(&seating.table_name, table, "Seatings follow table order");

            let at_table: BTreeSet<&str> = seating.players().into_iter().collect();
            prop_assert_eq!(at_table.len(), SEATS_PER_TABLE, "Four distinct players per table");

            for player in seating.players() {
                prop_assert!(seen.insert(player.to_string()), "{} seated twice", player);
            }
        }

        let expected: BTreeSet<String> = players.into_iter().collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn test_advanced_round_seats_everyone_once(table_count in 1usize..=6, score in -500i32..=500) {
        let (players, tables) = roster(table_count);
        let mut state = TournamentState::new(3, players.clone(), tables).unwrap();

        let seatings = state.current_round().seatings.clone();
        for seating in &seatings {
            state
                .apply_score(&seating.north, &seating.south, &seating.west, &seating.east, score, 0)
                .unwrap();
        }
        state.advance_round().unwrap();

        let seated: BTreeSet<&str> = state
            .current_round()
            .seatings
            .iter()
            .flat_map(|s| s.players())
            .collect();
        prop_assert_eq!(seated.len(), players.len());
        prop_assert!(players.iter().all(|p| seated.contains(p.as_str())));
    }

    #[test]
    fn test_winner_flag_follows_scores(ns_score in -1000i32..=1000, we_score in -1000i32..=1000) {
        let (players, tables) = roster(1);
        let mut state = TournamentState::new(1, players, tables).unwrap();
        let seating = state.current_round().seatings[0].clone();

        state
            .apply_score(&seating.north, &seating.south, &seating.west, &seating.east, ns_score, we_score)
            .unwrap();

        let recorded = &state.current_round().seatings[0];
        prop_assert!(recorded.finished);
        prop_assert_eq!(recorded.ns_score, ns_score);
        prop_assert_eq!(recorded.we_score, we_score);
        prop_assert_eq!(recorded.ns_wins, ns_score >= we_score);
    }
}

//! Leaderboard aggregation behaviour.

mod common;

use common::{ranking, record};
use tourney_board::{MatchRecord, TeamStanding, compute_leaderboard};

#[test]
fn test_empty_input() {
    assert!(compute_leaderboard("T1", &[]).is_empty());
    assert!(compute_leaderboard("", &[]).is_empty());
}

#[test]
fn test_unknown_tournament_is_empty() {
    let matches = vec![record("T1", "Alpha", 5, 3)];
    assert!(compute_leaderboard("T9", &matches).is_empty());
}

#[test]
fn test_single_match() {
    let matches = vec![record("T1", "Alpha", 5, 3)];
    let standings = compute_leaderboard("T1", &matches);

    assert_eq!(
        standings,
        vec![TeamStanding {
            rank: 1,
            team_name: "Alpha".to_string(),
            matches_played: 1,
            total_kills: 3,
            total_placement_points: 5,
            total_points: 8,
        }]
    );
}

#[test]
fn test_aggregates_per_team() {
    let matches = vec![record("T1", "Alpha", 5, 3), record("T1", "Alpha", 2, 6)];
    let standings = compute_leaderboard("T1", &matches);

    assert_eq!(standings.len(), 1);
    let alpha = &standings[0];
    assert_eq!(alpha.matches_played, 2);
    assert_eq!(alpha.total_kills, 9);
    assert_eq!(alpha.total_placement_points, 7);
    assert_eq!(alpha.total_points, 16);
    assert_eq!(alpha.rank, 1);
}

#[test]
fn test_ranking_order() {
    // Totals 10, 20, 20 with kills 1, 5, 7.
    let matches = vec![
        record("T1", "Ten", 9, 1),
        record("T1", "TwentyFive", 15, 5),
        record("T1", "TwentySeven", 13, 7),
    ];
    let standings = compute_leaderboard("T1", &matches);

    assert_eq!(
        ranking(&standings),
        vec![
            ("TwentySeven".to_string(), 1),
            ("TwentyFive".to_string(), 2),
            ("Ten".to_string(), 3),
        ]
    );
}

#[test]
fn test_full_ties_get_sequential_ranks_in_first_seen_order() {
    let matches = vec![
        record("T1", "Second", 10, 4),
        record("T1", "First", 10, 4),
        record("T1", "Second", 0, 0),
    ];
    let standings = compute_leaderboard("T1", &matches);

    assert_eq!(
        ranking(&standings),
        vec![("Second".to_string(), 1), ("First".to_string(), 2)]
    );
}

#[test]
fn test_tournament_isolation() {
    let matches = vec![
        record("T1", "Alpha", 5, 3),
        record("T2", "Alpha", 50, 30),
        record("T2", "Bravo", 1, 1),
        record("T1", "Charlie", 1, 0),
    ];
    let standings = compute_leaderboard("T1", &matches);

    assert_eq!(
        ranking(&standings),
        vec![("Alpha".to_string(), 1), ("Charlie".to_string(), 2)]
    );
    let alpha = &standings[0];
    assert_eq!(alpha.total_points, 8);
    assert_eq!(alpha.matches_played, 1);
}

#[test]
fn test_input_is_untouched_and_result_repeatable() {
    let matches: Vec<MatchRecord> = vec![
        record("T1", "Alpha", 5, 3),
        record("T1", "Bravo", 5, 3),
    ];
    let snapshot = matches.clone();

    let first = compute_leaderboard("T1", &matches);
    let second = compute_leaderboard("T1", &matches);

    assert_eq!(first, second);
    assert_eq!(matches, snapshot);
}

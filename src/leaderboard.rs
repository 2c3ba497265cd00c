//! Leaderboard aggregation.
//!
//! Standings are computed on demand from the flat log of match records:
//! filter to one tournament, group by team name, sum, sort, rank. Nothing is
//! cached and nothing is read from a store here, so the result is purely a
//! function of its inputs.

use indexmap::IndexMap;
use serde::Serialize;

use crate::logging::trace;
use crate::records::{MatchRecord, Tournament};

/// One team's aggregated result within a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    /// 1-based position. Ties still get distinct, sequential ranks.
    pub rank: usize,
    pub team_name: String,
    pub matches_played: usize,
    /// Sum of kill points, read as a kill count.
    pub total_kills: i64,
    pub total_placement_points: i64,
    pub total_points: i64,
}

impl TeamStanding {
    fn new(team_name: &str) -> Self {
        Self {
            rank: 0,
            team_name: team_name.to_string(),
            matches_played: 0,
            total_kills: 0,
            total_placement_points: 0,
            total_points: 0,
        }
    }

    fn add(&mut self, record: &MatchRecord) {
        self.matches_played = self.matches_played.saturating_add(1);
        self.total_kills = self.total_kills.saturating_add(record.kill_points());
        self.total_placement_points = self
            .total_placement_points
            .saturating_add(record.placement_points());
        self.total_points = self.total_points.saturating_add(record.total_points());
    }

    /// Whether this team finished in the top three.
    pub fn is_podium(&self) -> bool {
        (1..=3).contains(&self.rank)
    }
}

/// Rank the teams of one tournament.
///
/// Only records whose tournament id equals `tournament_id` count. Teams are
/// grouped by exact team name and ordered by total points, then total kills,
/// both descending. Teams equal on both keep the order in which they first
/// appear in `all_matches`. No matching records gives an empty list.
pub fn compute_leaderboard(tournament_id: &str, all_matches: &[MatchRecord]) -> Vec<TeamStanding> {
    let mut groups: IndexMap<&str, TeamStanding> = IndexMap::new();

    for record in all_matches
        .iter()
        .filter(|record| record.tournament_id() == tournament_id)
    {
        groups
            .entry(record.team_name())
            .or_insert_with(|| TeamStanding::new(record.team_name()))
            .add(record);
    }

    let mut standings: Vec<TeamStanding> = groups.into_values().collect();

    // Stable, so full ties stay in first-seen order.
    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| b.total_kills.cmp(&a.total_kills))
    });

    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index + 1;
        trace!(
            rank = standing.rank,
            team = %standing.team_name,
            points = standing.total_points,
            kills = standing.total_kills,
            "ranked team"
        );
    }

    standings
}

/// A tournament together with its current standings.
///
/// Empty standings mean the tournament exists but has no match data yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentLeaderboard {
    pub tournament: Tournament,
    pub standings: Vec<TeamStanding>,
}

impl TournamentLeaderboard {
    pub fn has_match_data(&self) -> bool {
        !self.standings.is_empty()
    }
}

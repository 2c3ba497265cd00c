//! Match records: one team's result row for one match.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logging::warn;

use super::coerce::{lenient_int, null_as_zero};
use super::error::ValidationError;
use super::generate_id;

/// One team's placement and kills for one match of a tournament.
///
/// `total_points` always equals `placement_points + kill_points`. The only
/// constructor computes it, the fields are read-only, and records read back
/// from a store have it recomputed from their own source fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredMatch")]
pub struct MatchRecord {
    id: String,
    tournament_id: String,
    match_number: i64,
    team_name: String,
    placement_position: i64,
    placement_points: i64,
    kill_points: i64,
    total_points: i64,
    created_at: DateTime<Utc>,
}

impl MatchRecord {
    /// Assign an id and creation time, and compute the total.
    ///
    /// Fails only when no tournament is selected.
    pub fn new(fields: NewMatch) -> Result<Self, ValidationError> {
        if fields.tournament_id.trim().is_empty() {
            return Err(ValidationError::MissingTournament);
        }

        Ok(Self {
            id: generate_id(),
            total_points: fields.placement_points.saturating_add(fields.kill_points),
            tournament_id: fields.tournament_id,
            match_number: fields.match_number,
            team_name: fields.team_name,
            placement_position: fields.placement_position,
            placement_points: fields.placement_points,
            kill_points: fields.kill_points,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tournament_id(&self) -> &str {
        &self.tournament_id
    }

    pub fn match_number(&self) -> i64 {
        self.match_number
    }

    /// The grouping key for standings. Compared exactly, case included.
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn placement_position(&self) -> i64 {
        self.placement_position
    }

    pub fn placement_points(&self) -> i64 {
        self.placement_points
    }

    /// Kill points, also counted as kills (one point per kill).
    pub fn kill_points(&self) -> i64 {
        self.kill_points
    }

    pub fn total_points(&self) -> i64 {
        self.total_points
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Persisted form of a match. Numeric fields tolerate `null`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredMatch {
    id: String,
    tournament_id: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    match_number: i64,
    team_name: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    placement_position: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    placement_points: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    kill_points: i64,
    #[serde(default)]
    total_points: Option<i64>,
    created_at: DateTime<Utc>,
}

impl From<StoredMatch> for MatchRecord {
    fn from(stored: StoredMatch) -> Self {
        let total_points = stored.placement_points.saturating_add(stored.kill_points);
        if stored.total_points != Some(total_points) {
            warn!(
                id = %stored.id,
                stored = ?stored.total_points,
                computed = total_points,
                "stored total points disagree with their parts, using computed total"
            );
        }

        Self {
            id: stored.id,
            tournament_id: stored.tournament_id,
            match_number: stored.match_number,
            team_name: stored.team_name,
            placement_position: stored.placement_position,
            placement_points: stored.placement_points,
            kill_points: stored.kill_points,
            total_points,
            created_at: stored.created_at,
        }
    }
}

/// Fields an admin supplies to record a match result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewMatch {
    pub tournament_id: String,
    pub match_number: i64,
    pub team_name: String,
    pub placement_position: i64,
    pub placement_points: i64,
    pub kill_points: i64,
}

/// Raw match form input, every field a string as typed.
#[derive(Debug, Clone, Default)]
pub struct MatchForm {
    pub tournament_id: String,
    pub match_number: String,
    pub team_name: String,
    pub placement_position: String,
    pub placement_points: String,
    pub kill_points: String,
}

impl MatchForm {
    /// Coerce numeric fields. The tournament selection is checked when the
    /// record is created, not here.
    pub fn parse(&self) -> NewMatch {
        NewMatch {
            tournament_id: self.tournament_id.clone(),
            match_number: lenient_int(&self.match_number),
            team_name: self.team_name.clone(),
            placement_position: lenient_int(&self.placement_position),
            placement_points: lenient_int(&self.placement_points),
            kill_points: lenient_int(&self.kill_points),
        }
    }

    /// The total the form would record, as shown while typing.
    pub fn preview_total(&self) -> i64 {
        lenient_int(&self.placement_points).saturating_add(lenient_int(&self.kill_points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(placement: i64, kills: i64) -> NewMatch {
        NewMatch {
            tournament_id: "T1".to_string(),
            match_number: 1,
            team_name: "Alpha".to_string(),
            placement_position: 2,
            placement_points: placement,
            kill_points: kills,
        }
    }

    #[test]
    fn test_new_computes_total() {
        let record = MatchRecord::new(fields(5, 3)).unwrap();
        assert_eq!(record.total_points(), 8);
        assert_eq!(record.tournament_id(), "T1");
        assert!(!record.id().is_empty());
    }

    #[test]
    fn test_new_requires_tournament() {
        let mut input = fields(5, 3);
        input.tournament_id = "  ".to_string();
        assert_eq!(
            MatchRecord::new(input),
            Err(ValidationError::MissingTournament)
        );
    }

    #[test]
    fn test_negative_points_allowed() {
        let record = MatchRecord::new(fields(-2, 1)).unwrap();
        assert_eq!(record.total_points(), -1);
    }

    #[test]
    fn test_json_shape() {
        let record = MatchRecord::new(fields(5, 3)).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["tournamentId"], json!("T1"));
        assert_eq!(value["teamName"], json!("Alpha"));
        assert_eq!(value["placementPoints"], json!(5));
        assert_eq!(value["killPoints"], json!(3));
        assert_eq!(value["totalPoints"], json!(8));

        let back: MatchRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_drifted_total_is_recomputed() {
        let record: MatchRecord = serde_json::from_value(json!({
            "id": "id-1",
            "tournamentId": "T1",
            "matchNumber": 1,
            "teamName": "Alpha",
            "placementPosition": 1,
            "placementPoints": 10,
            "killPoints": 4,
            "totalPoints": 99,
            "createdAt": "2026-01-28T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(record.total_points(), 14);
    }

    #[test]
    fn test_null_numbers_read_as_zero() {
        let record: MatchRecord = serde_json::from_value(json!({
            "id": "id-2",
            "tournamentId": "T1",
            "matchNumber": null,
            "teamName": "Beta",
            "placementPosition": null,
            "placementPoints": null,
            "killPoints": 6,
            "totalPoints": null,
            "createdAt": "2026-01-28T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(record.placement_points(), 0);
        assert_eq!(record.total_points(), 6);
    }

    #[test]
    fn test_form_parse_and_preview() {
        let form = MatchForm {
            tournament_id: "T1".to_string(),
            match_number: "3".to_string(),
            team_name: "Gamma".to_string(),
            placement_position: "1st".to_string(),
            placement_points: "12".to_string(),
            kill_points: "x".to_string(),
        };
        assert_eq!(form.preview_total(), 12);

        let parsed = form.parse();
        assert_eq!(parsed.match_number, 3);
        assert_eq!(parsed.placement_position, 1);
        assert_eq!(parsed.kill_points, 0);
    }
}

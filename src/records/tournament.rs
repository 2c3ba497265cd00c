//! Tournament records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::logging::warn;

use super::coerce::{lenient_int, null_as_zero};
use super::error::ValidationError;
use super::generate_id;

/// A named event that match records are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    /// Opaque id, assigned at creation and never reused.
    pub id: String,
    pub name: String,
    /// Calendar date, persisted as `YYYY-MM-DD`.
    #[serde(default = "TournamentDate::missing")]
    pub date: TournamentDate,
    /// Expected match count. Informational, never checked against the data.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_matches: i64,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Assign an id and creation time to new tournament fields.
    pub fn new(fields: NewTournament) -> Self {
        Self {
            id: generate_id(),
            name: fields.name,
            date: TournamentDate::Day(fields.date),
            total_matches: fields.total_matches,
            created_at: Utc::now(),
        }
    }

    /// The date as shown to viewers, e.g. `28 Jan 2026`.
    pub fn display_date(&self) -> String {
        self.date.display()
    }
}

/// A tournament date as read from the store.
///
/// Dates written by this crate are always [`TournamentDate::Day`]. Text that
/// is not `YYYY-MM-DD` is kept verbatim so one bad row neither breaks the
/// collection nor gets rewritten on the next save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TournamentDate {
    Day(NaiveDate),
    Unparsed(String),
}

impl TournamentDate {
    fn missing() -> Self {
        Self::Unparsed(String::new())
    }

    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            Self::Day(day) => Some(*day),
            Self::Unparsed(_) => None,
        }
    }

    /// `28 Jan 2026` for real dates, the raw text otherwise.
    pub fn display(&self) -> String {
        match self {
            Self::Day(day) => day.format("%d %b %Y").to_string(),
            Self::Unparsed(raw) => raw.clone(),
        }
    }

    fn from_text(raw: String) -> Self {
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(day) => Self::Day(day),
            Err(_) => {
                warn!(date = %raw, "stored tournament date is not YYYY-MM-DD");
                Self::Unparsed(raw)
            }
        }
    }
}

impl Serialize for TournamentDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Day(day) => serializer.collect_str(&day.format("%Y-%m-%d")),
            Self::Unparsed(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for TournamentDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(raw)) => Self::from_text(raw),
            None | Some(Value::Null) => Self::Unparsed(String::new()),
            Some(other) => Self::Unparsed(other.to_string()),
        })
    }
}

/// Fields an admin supplies to create a tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTournament {
    pub name: String,
    pub date: NaiveDate,
    pub total_matches: i64,
}

/// Raw tournament form input.
#[derive(Debug, Clone, Default)]
pub struct TournamentForm {
    pub name: String,
    pub date: String,
    pub total_matches: String,
}

impl TournamentForm {
    /// Coerce the form into typed fields. Only the date can be rejected.
    pub fn parse(&self) -> Result<NewTournament, ValidationError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            ValidationError::InvalidDate {
                input: self.date.clone(),
            }
        })?;

        Ok(NewTournament {
            name: self.name.clone(),
            date,
            total_matches: lenient_int(&self.total_matches),
        })
    }
}

//! Tournament and match record management over an injected store.

use thiserror::Error;

use crate::leaderboard::{TournamentLeaderboard, compute_leaderboard};
use crate::logging::{info, warn};
use crate::records::{MatchRecord, NewMatch, NewTournament, Tournament, ValidationError};
use crate::store::{self, MATCHES_KEY, Store, StoreError, TOURNAMENTS_KEY};

/// Label shown for a match whose tournament no longer exists.
pub const UNKNOWN_TOURNAMENT: &str = "Unknown Tournament";

/// Errors from record management.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Tournament not found: {0}")]
    TournamentNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A match record paired with the name of its tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    pub tournament_name: String,
    pub record: MatchRecord,
}

/// A deleted tournament and how many match records went with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedTournament {
    pub tournament: Tournament,
    pub removed_matches: usize,
}

/// Reads and writes tournaments and match records in a [`Store`].
///
/// Every call reads the current snapshot from the store; nothing is cached
/// between calls.
pub struct Registry<S> {
    store: S,
}

impl<S: Store> Registry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Create a tournament and append it to the collection.
    pub fn create_tournament(&mut self, fields: NewTournament) -> Result<Tournament, RegistryError> {
        let tournament = Tournament::new(fields);

        let mut tournaments = self.tournaments()?;
        tournaments.push(tournament.clone());
        store::save_collection(&mut self.store, TOURNAMENTS_KEY, &tournaments)?;

        info!(id = %tournament.id, name = %tournament.name, "tournament created");
        Ok(tournament)
    }

    /// Delete a tournament and every match filed under it.
    ///
    /// Matches go first, then the tournament, as two separate writes. An
    /// interruption in between leaves the tournament with no matches rather
    /// than orphaned matches.
    pub fn delete_tournament(&mut self, id: &str) -> Result<DeletedTournament, RegistryError> {
        let mut tournaments = self.tournaments()?;
        let Some(position) = tournaments.iter().position(|t| t.id == id) else {
            return Err(RegistryError::TournamentNotFound(id.to_string()));
        };

        let mut matches = self.matches()?;
        let before = matches.len();
        matches.retain(|m| m.tournament_id() != id);
        let removed_matches = before - matches.len();
        store::save_collection(&mut self.store, MATCHES_KEY, &matches)?;

        let tournament = tournaments.remove(position);
        store::save_collection(&mut self.store, TOURNAMENTS_KEY, &tournaments)?;

        info!(id = %id, removed_matches, "tournament deleted");
        Ok(DeletedTournament {
            tournament,
            removed_matches,
        })
    }

    /// Record one team's result for one match.
    ///
    /// Rejects an empty tournament selection. The tournament id is not
    /// otherwise checked against existing tournaments.
    pub fn create_match(&mut self, fields: NewMatch) -> Result<MatchRecord, RegistryError> {
        let record = match MatchRecord::new(fields) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "match rejected");
                return Err(e.into());
            }
        };

        let mut matches = self.matches()?;
        matches.push(record.clone());
        store::save_collection(&mut self.store, MATCHES_KEY, &matches)?;

        info!(
            id = %record.id(),
            tournament = %record.tournament_id(),
            team = %record.team_name(),
            total = record.total_points(),
            "match recorded"
        );
        Ok(record)
    }

    /// All tournaments in creation order.
    pub fn tournaments(&self) -> Result<Vec<Tournament>, RegistryError> {
        Ok(store::load_collection(&self.store, TOURNAMENTS_KEY)?)
    }

    /// All tournaments, latest date first. Same-day tournaments keep
    /// creation order; tournaments without a readable date come last.
    pub fn tournaments_by_date(&self) -> Result<Vec<Tournament>, RegistryError> {
        let mut tournaments = self.tournaments()?;
        tournaments.sort_by(|a, b| b.date.day().cmp(&a.date.day()));
        Ok(tournaments)
    }

    pub fn find_tournament(&self, id: &str) -> Result<Tournament, RegistryError> {
        self.tournaments()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| RegistryError::TournamentNotFound(id.to_string()))
    }

    /// All match records in insertion order.
    pub fn matches(&self) -> Result<Vec<MatchRecord>, RegistryError> {
        Ok(store::load_collection(&self.store, MATCHES_KEY)?)
    }

    /// The `limit` most recently created matches, newest first.
    ///
    /// Records created in the same instant keep their insertion order.
    pub fn recent_matches(&self, limit: usize) -> Result<Vec<RecentEntry>, RegistryError> {
        let tournaments = self.tournaments()?;
        let mut matches = self.matches()?;
        matches.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(matches
            .into_iter()
            .take(limit)
            .map(|record| {
                let tournament_name = tournaments
                    .iter()
                    .find(|t| t.id == record.tournament_id())
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| UNKNOWN_TOURNAMENT.to_string());
                RecentEntry {
                    tournament_name,
                    record,
                }
            })
            .collect())
    }

    /// Current standings for a tournament.
    ///
    /// A missing tournament is [`RegistryError::TournamentNotFound`]; an
    /// existing one with no matches yields empty standings.
    pub fn leaderboard(&self, id: &str) -> Result<TournamentLeaderboard, RegistryError> {
        let tournament = self.find_tournament(id)?;
        let matches = self.matches()?;
        let standings = compute_leaderboard(&tournament.id, &matches);

        Ok(TournamentLeaderboard {
            tournament,
            standings,
        })
    }
}

impl RegistryError {
    /// Returns `true` for rejected input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` when the requested tournament does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TournamentNotFound(_))
    }
}

//! Common test utilities and fixtures.
//!
//! Shared builders for match records and registries, so each test states
//! only the numbers it cares about.

#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::Value;
use tourney_board::{
    MatchRecord, MemoryStore, NewMatch, NewTournament, Registry, Store, StoreError, TeamStanding,
    Tournament,
};

/// A match record for `team` in `tournament` with the given points.
pub fn record(tournament: &str, team: &str, placement: i64, kills: i64) -> MatchRecord {
    match MatchRecord::new(result(tournament, team, placement, kills)) {
        Ok(record) => record,
        Err(e) => panic!("fixture record rejected: {e}"),
    }
}

/// Match input for `team` in `tournament` with the given points.
pub fn result(tournament: &str, team: &str, placement: i64, kills: i64) -> NewMatch {
    NewMatch {
        tournament_id: tournament.to_string(),
        match_number: 1,
        team_name: team.to_string(),
        placement_position: 1,
        placement_points: placement,
        kill_points: kills,
    }
}

/// Tournament input dated 2026-01-28.
pub fn tournament(name: &str) -> NewTournament {
    NewTournament {
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(),
        total_matches: 6,
    }
}

/// An in-memory registry holding the given tournaments.
pub fn registry_with(names: &[&str]) -> anyhow::Result<(Registry<MemoryStore>, Vec<Tournament>)> {
    let mut registry = Registry::new(MemoryStore::new());
    let mut created = Vec::new();
    for name in names {
        created.push(registry.create_tournament(tournament(name))?);
    }
    Ok((registry, created))
}

/// `(team, rank)` pairs in standing order.
pub fn ranking(standings: &[TeamStanding]) -> Vec<(String, usize)> {
    standings
        .iter()
        .map(|s| (s.team_name.clone(), s.rank))
        .collect()
}

/// A store that fails its `fail_on`-th write (1-based) and forwards
/// everything else to `inner`.
pub struct FailingStore<S> {
    inner: S,
    fail_on: usize,
    writes: usize,
}

impl<S: Store> FailingStore<S> {
    pub fn new(inner: S, fail_on: usize) -> Self {
        Self {
            inner,
            fail_on,
            writes: 0,
        }
    }
}

impl<S: Store> Store for FailingStore<S> {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.writes += 1;
        if self.writes == self.fail_on {
            return Err(StoreError::InvalidFormat(format!(
                "write {} to '{key}' refused",
                self.writes
            )));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }
}

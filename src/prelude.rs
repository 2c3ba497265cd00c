//! Convenient re-exports for common usage patterns.
//!
//! ```ignore
//! use tourney_board::prelude::*;
//!
//! let registry = Registry::new(MemoryStore::new());
//! let standings = compute_leaderboard("t1", &registry.matches()?);
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Store
pub use crate::store::{MemoryStore, Store, StoreError};
#[cfg(feature = "persistent")]
pub use crate::store::DiskStore;

// Records and aggregation
pub use crate::leaderboard::{TeamStanding, TournamentLeaderboard, compute_leaderboard};
pub use crate::records::{
    MatchForm, MatchRecord, NewMatch, NewTournament, Tournament, TournamentDate, TournamentForm,
    ValidationError,
};
pub use crate::registry::{DeletedTournament, RecentEntry, Registry, RegistryError};

// Session and configuration
pub use crate::config::{AdminConfig, Config};
pub use crate::session::{SessionError, is_logged_in, login, logout};

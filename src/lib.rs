//! Local tournament leaderboards over a JSON key-value store.
//!
//! An admin creates tournaments and records one row per team per match
//! (placement points and kill points). Viewers get ranked standings computed
//! on demand from those rows.
//!
//! # Quick Start
//!
//! ```ignore
//! use tourney_board::prelude::*;
//!
//! let mut registry = Registry::new(MemoryStore::new());
//! let cup = registry.create_tournament(TournamentForm {
//!     name: "Spring Cup".into(),
//!     date: "2026-03-14".into(),
//!     total_matches: "6".into(),
//! }.parse()?)?;
//!
//! registry.create_match(MatchForm {
//!     tournament_id: cup.id.clone(),
//!     team_name: "Alpha".into(),
//!     placement_points: "10".into(),
//!     kill_points: "4".into(),
//!     ..MatchForm::default()
//! }.parse())?;
//!
//! for standing in registry.leaderboard(&cup.id)?.standings {
//!     println!("{} {} {}", standing.rank, standing.team_name, standing.total_points);
//! }
//! ```
//!
//! # Modules
//!
//! - [`store`] - The [`Store`] trait, an in-memory store, and a fjall-backed
//!   [`DiskStore`] (requires `persistent` feature)
//! - [`records`] - Typed tournament and match records and their input forms
//! - [`leaderboard`] - The pure [`compute_leaderboard`] aggregation
//! - [`registry`] - Record management with cascading delete
//! - [`session`] - The admin login flag
//! - [`config`] - TOML configuration
//!
//! # Feature Flags
//!
//! - `persistent` - Enable the on-disk store (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `full` - Enable all features

mod logging;

pub mod config;
pub mod leaderboard;
pub mod prelude;
pub mod records;
pub mod registry;
pub mod session;
pub mod store;
#[cfg(feature = "cli")]
pub mod subscriber;

mod error;

pub use error::{Error, Result};

pub use config::{AdminConfig, Config, ConfigError, LogFormat, LoggingConfig, StoreConfig};
pub use leaderboard::{TeamStanding, TournamentLeaderboard, compute_leaderboard};
pub use records::{
    MatchForm, MatchRecord, NewMatch, NewTournament, Tournament, TournamentDate, TournamentForm,
    ValidationError,
};
pub use registry::{DeletedTournament, RecentEntry, Registry, RegistryError};
pub use session::SessionError;
#[cfg(feature = "persistent")]
pub use store::DiskStore;
pub use store::{MemoryStore, Store, StoreError};

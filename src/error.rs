//! Unified error type for the tourney-board library.
//!
//! Each module has its own error enum; [`Error`] wraps them so application
//! code can use a single type with `?`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::registry::RegistryError;
use crate::session::SessionError;
use crate::store::StoreError;

/// Unified error type for all tourney-board operations.
///
/// ```ignore
/// use tourney_board::{Registry, Result, MemoryStore};
///
/// fn standings(id: &str) -> Result<usize> {
///     let registry = Registry::new(MemoryStore::new());
///     Ok(registry.leaderboard(id)?.standings.len())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error reading or writing the key-value store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Rejected input or missing tournament.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Failed login or session flag access.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Unreadable configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if the caller supplied input that was rejected.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Registry(e) if e.is_validation())
    }

    /// Returns `true` if a requested tournament does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Registry(e) if e.is_not_found())
    }

    /// Returns `true` if this is a store error, direct or nested.
    pub fn is_store(&self) -> bool {
        matches!(
            self,
            Self::Store(_)
                | Self::Registry(RegistryError::Store(_))
                | Self::Session(SessionError::Store(_))
        )
    }
}

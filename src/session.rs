//! Admin session flag.
//!
//! Logging in compares against a single shared credential pair and, on a
//! match, sets [`ADMIN_SESSION_KEY`] to the JSON string `"true"`. This gates
//! admin actions in the CLI; it does not protect the store.

use serde_json::Value;
use thiserror::Error;

use crate::config::AdminConfig;
use crate::logging::{info, warn};
use crate::store::{ADMIN_SESSION_KEY, Store, StoreError};

const LOGGED_IN: &str = "true";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Start an admin session if the credentials match.
pub fn login<S: Store + ?Sized>(
    store: &mut S,
    admin: &AdminConfig,
    username: &str,
    password: &str,
) -> Result<(), SessionError> {
    if username != admin.username || password != admin.password {
        warn!(username = username, "admin login rejected");
        return Err(SessionError::InvalidCredentials);
    }

    store.set(ADMIN_SESSION_KEY, Value::String(LOGGED_IN.to_string()))?;
    info!(username = username, "admin logged in");
    Ok(())
}

/// End the admin session. Logging out twice is fine.
pub fn logout<S: Store + ?Sized>(store: &mut S) -> Result<(), SessionError> {
    store.remove(ADMIN_SESSION_KEY)?;
    info!("admin logged out");
    Ok(())
}

/// Whether an admin session is active. Any value other than `"true"`
/// counts as logged out.
pub fn is_logged_in<S: Store + ?Sized>(store: &S) -> Result<bool, SessionError> {
    Ok(matches!(
        store.get(ADMIN_SESSION_KEY)?,
        Some(Value::String(flag)) if flag == LOGGED_IN
    ))
}

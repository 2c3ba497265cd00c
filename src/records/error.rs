//! Validation errors for record input.

use thiserror::Error;

/// Input that cannot become a record.
///
/// Numeric fields never fail (they coerce to 0); only the required
/// tournament selection and the typed date can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a tournament")]
    MissingTournament,

    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },
}

//! Typed tournament and match records.
//!
//! These are the shapes persisted under the `tournaments` and `matches`
//! store keys (camelCase JSON), plus the string-typed forms admin input
//! arrives in.

mod coerce;
mod error;
mod match_record;
mod tournament;

pub use coerce::lenient_int;
pub use error::ValidationError;
pub use match_record::{MatchForm, MatchRecord, NewMatch};
pub use tournament::{NewTournament, Tournament, TournamentDate, TournamentForm};

/// Generate a fresh opaque record id.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

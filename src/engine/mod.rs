// Pure tournament-progression core. No I/O in this module tree: every
// function maps loaded entities to updated entities or an EngineError, and
// the service layer owns persistence.
pub mod error;
pub mod ledger;
pub mod standings;
pub mod bracket;
pub mod rating;

#[cfg(test)]
mod ledger_test;
#[cfg(test)]
mod rating_test;

pub use error::EngineError;
pub use bracket::{BracketState, Pairing, PhaseEligibility};
pub use rating::PlayerCard;
pub use standings::StandingsRow;

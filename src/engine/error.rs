use crate::models::Phase;
use thiserror::Error;
use uuid::Uuid;

/// Terminal failures of engine operations. Never recovered from internally;
/// the caller rejects the requested action with the message as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    #[error("no matching goal event to undo")]
    NoSuchEvent,

    #[error("phase {phase} is not eligible: {reason}")]
    PhaseNotEligible { phase: Phase, reason: String },

    #[error("phase {0} already has matches")]
    PhaseAlreadyActive(Phase),

    #[error("knockout match {0} ended level; winner undetermined")]
    UndeterminedWinner(Uuid),

    #[error("invalid score: {0}")]
    InvalidScore(String),
}

//! Error types for the engine.

use exile_rules::{CatalogError, TalentId};
use thiserror::Error;

use crate::session::Phase;

/// Every engine failure is deterministic: a presentation bug or a content bug.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Presentation asked for an option that is not in the selectable set.
    #[error("Invalid choice index {index} ({available} selectable)")]
    InvalidChoiceIndex { index: usize, available: usize },

    /// A money-gated choice was requested without the funds.
    #[error("Insufficient funds: requires {required}, have {available}")]
    InsufficientFunds { required: i64, available: i64 },

    /// Nothing can be presented and the catalog defines no fallback ending.
    #[error("No eligible event and no fallback ending")]
    NoEligibleEvent,

    /// The operation is not legal in the current phase.
    #[error("Cannot {operation} during {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },

    #[error("No event is currently presented")]
    NoActiveEvent,

    /// A choice was made while the previous result is still on screen.
    #[error("A transition is still pending")]
    TransitionPending,

    #[error("Talent {0} is not in the offered set")]
    TalentNotOffered(TalentId),

    #[error("No talent refreshes left")]
    RefreshesExhausted,

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, EngineError>;

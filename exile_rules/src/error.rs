//! Error types for catalog authoring and validation.

use thiserror::Error;

use crate::catalog::{EndingId, EventId, TalentId};

/// Content-authoring errors found while validating a catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate event id: {0}")]
    DuplicateEventId(EventId),

    #[error("Duplicate talent id: {0}")]
    DuplicateTalentId(TalentId),

    #[error("Duplicate ending id: {0}")]
    DuplicateEndingId(EndingId),

    /// A choice is gated on a talent the catalog never offers.
    #[error("Event {event} requires unknown talent {talent}")]
    UnknownTalentRequirement { event: EventId, talent: TalentId },

    /// A talent rule is keyed on a talent the catalog never offers.
    #[error("Rule '{rule}' refers to unknown talent {talent}")]
    UnknownRuleTalent { rule: String, talent: TalentId },

    #[error("Event {event} has no choices")]
    EmptyChoices { event: EventId },

    #[error("Catalog declares no endings")]
    NoEndings,

    #[error("Fallback ending {0} is not declared")]
    UnknownFallbackEnding(EndingId),

    /// Nothing guarantees the selection loop can always make progress.
    #[error("Catalog has neither an always-eligible filler event nor a fallback ending")]
    NoFallback,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;

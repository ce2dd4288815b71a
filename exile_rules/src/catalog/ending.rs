//! Ending definitions.

use serde::Serialize;

use super::{Condition, EndingId};
use crate::stats::StatRecord;

/// A terminal condition. Declaration order in the catalog is priority.
#[derive(Clone, Serialize)]
pub struct Ending {
    pub id: EndingId,
    pub title: String,
    pub description: String,
    #[serde(skip)]
    pub condition: Condition,
}

impl Ending {
    /// Create a new ending.
    pub fn new(
        id: impl Into<EndingId>,
        title: impl Into<String>,
        description: impl Into<String>,
        condition: Condition,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            condition,
        }
    }

    /// Whether the ending's condition holds for `state`.
    pub fn matches(&self, state: &StatRecord) -> bool {
        (self.condition)(state)
    }
}

impl std::fmt::Debug for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ending")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

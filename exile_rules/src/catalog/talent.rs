//! Talent definitions.

use serde::{Deserialize, Serialize};

use super::{Rarity, TalentCategory, TalentId};

/// A run-long modifier picked once at the start.
///
/// What a talent does is not stored here: its one-time adjustment and its
/// per-turn modifiers are registered in the catalog's rule tables by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub id: TalentId,
    pub name: String,
    pub category: TalentCategory,
    pub rarity: Rarity,
    pub description: String,
}

impl Talent {
    /// Create a new talent.
    pub fn new(
        id: impl Into<TalentId>,
        name: impl Into<String>,
        category: TalentCategory,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            rarity,
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

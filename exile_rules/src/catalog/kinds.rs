//! Classification enums for catalog entries: rarity, talent category, choice style.

use serde::{Deserialize, Serialize};

/// Rarity tiers for talents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

/// Talent categories, used for grouping in the talent index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TalentCategory {
    Survival,
    Resource,
    Social,
    Time,
    Skill,
    Special,
}

impl TalentCategory {
    /// Display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            TalentCategory::Survival => "Survival",
            TalentCategory::Resource => "Resource",
            TalentCategory::Social => "Social",
            TalentCategory::Time => "Time",
            TalentCategory::Skill => "Skill",
            TalentCategory::Special => "Special",
        }
    }
}

/// Presentation style of a choice.
///
/// The engine only reads it through talent rules that key on it
/// (e.g. a rule that only touches aggressive choices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChoiceKind {
    #[default]
    Normal,
    Aggressive,
    Safe,
    Stealth,
    Social,
    Special,
    /// Unlocked by a talent.
    Talent,
}

//! Event tags - semantic flavor markers on events.

use serde::{Deserialize, Serialize};

/// Tags describe what kind of scene an event is.
///
/// Presentation uses them to pick a backdrop; a few talent rules key on them
/// (food events, social events).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventTag {
    City,
    Danger,
    Digital,
    Social,
    Scam,
    Food,
    Sky,
    Water,
    Mech,
    Human,
    Money,
    Survival,
    Nature,
    Time,
    Dark,
    Stealth,

    /// Custom tag for extension.
    Custom(String),
}

impl EventTag {
    /// Create a custom tag.
    pub fn custom(name: impl Into<String>) -> Self {
        EventTag::Custom(name.into())
    }

    /// Convert the tag to a string representation.
    pub fn as_string(&self) -> String {
        match self {
            EventTag::Custom(s) => format!("custom:{}", s),
            other => format!("{:?}", other).to_uppercase(),
        }
    }
}

impl std::fmt::Display for EventTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

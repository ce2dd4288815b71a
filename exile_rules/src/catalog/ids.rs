//! Identifiers for catalog entries.
//!
//! Catalog ids are authored strings (`"E100_START"`, `"T02"`) rather than
//! generated UUIDs, since content tables refer to each other by name.

use serde::{Deserialize, Serialize};

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create an id from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

catalog_id!(
    /// Unique identifier for talents.
    TalentId
);

catalog_id!(
    /// Unique identifier for events. Must be globally unique in a catalog.
    EventId
);

catalog_id!(
    /// Unique identifier for endings.
    EndingId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_conversions() {
        let id = EventId::from("G01_MUSK");
        assert_eq!(id.as_str(), "G01_MUSK");
        assert_eq!(id.to_string(), "G01_MUSK");
        assert_eq!(id, EventId::new(String::from("G01_MUSK")));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&TalentId::from("T07")).unwrap();
        assert_eq!(json, "\"T07\"");
    }
}

//! The content that ships with Last72: an ousted president has 72 hours to
//! get out alive.
//!
//! Tables are plain functions returning fresh vectors so a catalog can be
//! built as often as needed (tests build many).

mod endings;
mod events;
mod rules;
mod talents;

pub use endings::{endings, FALLBACK_ENDING};
pub use events::{events, FILLER_EVENT, ROUTE_SELECT_EVENT};
pub use rules::{acquire_rules, modifiers};
pub use talents::talents;

use crate::catalog::Catalog;

/// Build the full shipped catalog.
pub fn standard_catalog() -> Catalog {
    Catalog::new(talents(), events(), endings())
        .with_modifiers(modifiers())
        .with_acquire_rules(acquire_rules())
        .with_fallback_ending(FALLBACK_ENDING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EventId, TalentId};

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = standard_catalog();
        assert_eq!(catalog.validate(), Ok(()));
    }

    #[test]
    fn test_standard_catalog_has_filler_and_fallback() {
        let catalog = standard_catalog();

        let fillers: Vec<_> = catalog.filler_events().map(|e| e.id.as_str()).collect();
        assert_eq!(fillers, vec![FILLER_EVENT]);
        assert_eq!(
            catalog.fallback_ending().map(|e| e.id.as_str()),
            Some(FALLBACK_ENDING)
        );
    }

    #[test]
    fn test_every_rule_talent_is_offered() {
        let catalog = standard_catalog();
        for rule in catalog.modifiers() {
            assert!(catalog.talent(&rule.talent).is_some(), "{}", rule.name);
        }
        assert!(catalog.talent(&TalentId::from("T13")).is_some());
    }

    #[test]
    fn test_route_select_event_offers_every_route() {
        let catalog = standard_catalog();
        let event = catalog.event(&EventId::from(ROUTE_SELECT_EVENT)).unwrap();

        let routes: Vec<_> = event.choices.iter().filter_map(|c| c.set_route).collect();
        assert_eq!(routes.len(), 3);
        assert!(event.priority > 0);
    }

    #[test]
    fn test_no_event_can_soft_lock() {
        // A broke player without talents must still have a way forward.
        let catalog = standard_catalog();
        for event in catalog.events() {
            assert!(
                event
                    .choices
                    .iter()
                    .any(|c| c.talent_req.is_none() && c.money_req.is_none()),
                "{} has no unconditional choice",
                event.id
            );
        }
    }
}

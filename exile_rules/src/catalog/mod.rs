//! Content Catalog - the immutable tables of talents, events, endings, and
//! talent rules, loaded once at startup.
//!
//! The catalog consists of:
//! - **Talents**: run-long perks offered at the start
//! - **Events**: situations with choices, gated by condition, route, and repetition
//! - **Endings**: terminal conditions, checked in declaration order
//! - **Rules**: per-turn talent modifiers and one-time acquire rules

mod ending;
mod event;
mod ids;
mod kinds;
mod rules;
mod tag;
mod talent;

pub use ending::*;
pub use event::*;
pub use ids::*;
pub use kinds::*;
pub use rules::*;
pub use tag::*;
pub use talent::*;

use std::collections::{HashMap, HashSet};

use crate::error::{CatalogError, Result};

/// The complete, read-only content of a game.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    talents: Vec<Talent>,
    events: Vec<Event>,
    endings: Vec<Ending>,
    modifiers: Vec<TalentModifier>,
    acquire_rules: Vec<AcquireRule>,
    fallback_ending: Option<EndingId>,

    /// Index: EventId -> position in `events`.
    event_index: HashMap<EventId, usize>,
}

impl Catalog {
    /// Create a catalog from its three entity tables.
    ///
    /// Declaration order of `endings` is their priority.
    pub fn new(talents: Vec<Talent>, events: Vec<Event>, endings: Vec<Ending>) -> Self {
        let event_index = events
            .iter()
            .enumerate()
            .map(|(i, event)| (event.id.clone(), i))
            .collect();

        Self {
            talents,
            events,
            endings,
            modifiers: Vec::new(),
            acquire_rules: Vec::new(),
            fallback_ending: None,
            event_index,
        }
    }

    /// Register per-turn talent modifiers, evaluated in the given order.
    pub fn with_modifiers(mut self, modifiers: Vec<TalentModifier>) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Register one-time acquire rules.
    pub fn with_acquire_rules(mut self, rules: Vec<AcquireRule>) -> Self {
        self.acquire_rules = rules;
        self
    }

    /// Designate the ending forced when selection runs dry.
    pub fn with_fallback_ending(mut self, id: impl Into<EndingId>) -> Self {
        self.fallback_ending = Some(id.into());
        self
    }

    pub fn talents(&self) -> &[Talent] {
        &self.talents
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn endings(&self) -> &[Ending] {
        &self.endings
    }

    pub fn modifiers(&self) -> &[TalentModifier] {
        &self.modifiers
    }

    pub fn acquire_rules(&self) -> &[AcquireRule] {
        &self.acquire_rules
    }

    /// Get a talent by ID.
    pub fn talent(&self, id: &TalentId) -> Option<&Talent> {
        self.talents.iter().find(|t| &t.id == id)
    }

    /// Get an event by ID.
    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.event_index.get(id).and_then(|&i| self.events.get(i))
    }

    /// Get an ending by ID.
    pub fn ending(&self, id: &EndingId) -> Option<&Ending> {
        self.endings.iter().find(|e| &e.id == id)
    }

    /// The designated fallback ending, if any.
    pub fn fallback_ending(&self) -> Option<&Ending> {
        self.fallback_ending.as_ref().and_then(|id| self.ending(id))
    }

    /// Acquire rules registered for a talent, in registration order.
    pub fn acquire_rules_for<'a>(
        &'a self,
        talent: &'a TalentId,
    ) -> impl Iterator<Item = &'a AcquireRule> + 'a {
        self.acquire_rules.iter().filter(move |r| &r.talent == talent)
    }

    /// Events that are always eligible.
    pub fn filler_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_filler())
    }

    /// Check the catalog for authoring errors.
    ///
    /// A valid catalog has unique ids, talent references that resolve,
    /// at least one ending, and a guaranteed way to keep the loop moving.
    pub fn validate(&self) -> Result<()> {
        let mut talent_ids = HashSet::new();
        for talent in &self.talents {
            if !talent_ids.insert(&talent.id) {
                return Err(CatalogError::DuplicateTalentId(talent.id.clone()));
            }
        }

        let mut event_ids = HashSet::new();
        for event in &self.events {
            if !event_ids.insert(&event.id) {
                return Err(CatalogError::DuplicateEventId(event.id.clone()));
            }
            if event.choices.is_empty() {
                return Err(CatalogError::EmptyChoices {
                    event: event.id.clone(),
                });
            }
            for talent in event.choices.iter().filter_map(|c| c.talent_req.as_ref()) {
                if !talent_ids.contains(talent) {
                    return Err(CatalogError::UnknownTalentRequirement {
                        event: event.id.clone(),
                        talent: talent.clone(),
                    });
                }
            }
        }

        let mut ending_ids = HashSet::new();
        for ending in &self.endings {
            if !ending_ids.insert(&ending.id) {
                return Err(CatalogError::DuplicateEndingId(ending.id.clone()));
            }
        }
        if self.endings.is_empty() {
            return Err(CatalogError::NoEndings);
        }

        let rule_talents = self
            .modifiers
            .iter()
            .map(|m| (m.name.clone(), &m.talent))
            .chain(
                self.acquire_rules
                    .iter()
                    .map(|r| (format!("acquire {}", r.talent), &r.talent)),
            );
        for (rule, talent) in rule_talents {
            if !talent_ids.contains(talent) {
                return Err(CatalogError::UnknownRuleTalent {
                    rule,
                    talent: talent.clone(),
                });
            }
        }

        if let Some(id) = &self.fallback_ending {
            if !ending_ids.contains(id) {
                return Err(CatalogError::UnknownFallbackEnding(id.clone()));
            }
        }
        if self.fallback_ending.is_none() && self.filler_events().next().is_none() {
            return Err(CatalogError::NoFallback);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatPatch;

    fn wait_choice() -> Choice {
        Choice::new(
            "Wait",
            ChoiceKind::Safe,
            |s| StatPatch::new().with_time(s.time - 1.0),
            "Time passes.",
        )
    }

    fn minimal_catalog() -> Catalog {
        Catalog::new(
            vec![Talent::new("T01", "Iron Stomach", TalentCategory::Survival, Rarity::Rare)],
            vec![Event::new("U01", "Waiting", "Nothing.")
                .repeatable()
                .with_choice(wait_choice())],
            vec![Ending::new("E_SURVIVE", "Survived", "Made it.", |s| s.time <= 0.0)],
        )
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = minimal_catalog();

        assert!(catalog.event(&EventId::from("U01")).is_some());
        assert!(catalog.event(&EventId::from("nope")).is_none());
        assert!(catalog.talent(&TalentId::from("T01")).is_some());
        assert!(catalog.ending(&EndingId::from("E_SURVIVE")).is_some());
        assert_eq!(catalog.filler_events().count(), 1);
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(minimal_catalog().validate(), Ok(()));
    }

    #[test]
    fn test_validate_duplicate_event() {
        let catalog = Catalog::new(
            vec![],
            vec![
                Event::new("U01", "A", "A").repeatable().with_choice(wait_choice()),
                Event::new("U01", "B", "B").with_choice(wait_choice()),
            ],
            vec![Ending::new("E", "E", "E", |_| false)],
        );

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateEventId(EventId::from("U01")))
        );
    }

    #[test]
    fn test_validate_unknown_talent_requirement() {
        let catalog = Catalog::new(
            vec![],
            vec![Event::new("U01", "A", "A")
                .repeatable()
                .with_choice(wait_choice().with_talent_req("T99"))],
            vec![Ending::new("E", "E", "E", |_| false)],
        );

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownTalentRequirement { .. })
        ));
    }

    #[test]
    fn test_validate_requires_progress_guarantee() {
        let catalog = Catalog::new(
            vec![],
            vec![Event::new("G01", "Once", "Once").with_choice(wait_choice())],
            vec![Ending::new("E", "E", "E", |_| false)],
        );
        assert_eq!(catalog.validate(), Err(CatalogError::NoFallback));

        let catalog = catalog.with_fallback_ending("E");
        assert_eq!(catalog.validate(), Ok(()));
        assert_eq!(catalog.fallback_ending().map(|e| e.id.as_str()), Some("E"));
    }

    #[test]
    fn test_validate_unknown_fallback() {
        let catalog = minimal_catalog().with_fallback_ending("E_MISSING");
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::UnknownFallbackEnding(EndingId::from("E_MISSING")))
        );
    }

    #[test]
    fn test_validate_rule_talents() {
        let catalog = minimal_catalog().with_acquire_rules(vec![AcquireRule::new(
            "T42",
            |_| StatPatch::new(),
        )]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownRuleTalent { .. })
        ));
    }

    #[test]
    fn test_validate_no_endings() {
        let catalog = Catalog::new(
            vec![],
            vec![Event::new("U01", "A", "A").repeatable().with_choice(wait_choice())],
            vec![],
        );
        assert_eq!(catalog.validate(), Err(CatalogError::NoEndings));
    }
}

//! One-time talent acquisition.

use tracing::debug;

use exile_rules::{Catalog, StatRecord, TalentId};

/// Commit `talent` into a copy of `state` and apply its acquire rules once.
///
/// Bounded stats are clamped afterwards; the turn counter and history are
/// not touched, since acquisition is not a turn.
pub fn apply_acquisition(state: &StatRecord, talent: &TalentId, catalog: &Catalog) -> StatRecord {
    let mut next = state.clone();
    next.talents.insert(talent.clone());

    for rule in catalog.acquire_rules_for(talent) {
        let patch = (rule.effect)(&next);
        debug!(talent = %talent, ?patch, "Applying acquire rule");
        patch.apply_to(&mut next);
    }

    next.clamp_bounds();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use exile_rules::content::standard_catalog;
    use exile_rules::InitialStats;

    #[test]
    fn test_swiss_account_on_acquire() {
        let catalog = standard_catalog();
        let initial = StatRecord::new(&InitialStats {
            time: 72.0,
            money: 1_000_000,
            risk: 0,
            sanity: 100,
            ..Default::default()
        });

        let next = apply_acquisition(&initial, &TalentId::from("T02"), &catalog);

        assert_eq!(next.money, 6_000_000);
        assert_eq!(next.risk, 20);
        assert_eq!(next.time, initial.time);
        assert_eq!(next.sanity, initial.sanity);
        assert_eq!(next.health, initial.health);
        assert_eq!(next.event_count, initial.event_count);
        assert_eq!(next.history, initial.history);
        assert!(next.has_talent(&TalentId::from("T02")));
    }

    #[test]
    fn test_talent_without_rule_only_commits() {
        let catalog = standard_catalog();
        let initial = StatRecord::default();

        let next = apply_acquisition(&initial, &TalentId::from("T07"), &catalog);

        let mut expected = initial.clone();
        expected.talents.insert(TalentId::from("T07"));
        assert_eq!(next, expected);
    }

    #[test]
    fn test_acquire_clamps() {
        let catalog = standard_catalog();
        let mut initial = StatRecord::default();
        initial.risk = 95;

        let next = apply_acquisition(&initial, &TalentId::from("T09"), &catalog);
        assert_eq!(next.risk, 100);
    }
}

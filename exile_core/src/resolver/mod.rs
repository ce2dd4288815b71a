//! Choice Resolver - turns a picked option into the next Stat Record.
//!
//! Resolution works as follows:
//! 1. **Effect**: run the choice's effect to get a patch of absolute overrides
//! 2. **Modifiers**: let every registered talent rule adjust the patch, in order
//! 3. **Merge**: overlay the patch, bump the turn counter, mark the event seen,
//!    set the choice's flag and route
//! 4. **Clamp**: force bounded stats back into range
//! 5. **History**: append a snapshot for the end-of-run chart
//! 6. **Deltas**: diff against the prior record for display

mod acquire;

pub use acquire::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use exile_rules::{Event, ModifierContext, StatDeltas, StatRecord, TalentModifier};

use crate::error::{EngineError, Result};

/// The result of resolving one choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// The replacement record.
    pub state: StatRecord,
    /// What changed, for display.
    pub deltas: StatDeltas,
    pub result_text: String,
    /// Names of the talent modifiers that fired.
    pub applied_modifiers: Vec<String>,
}

/// Resolve choice `choice_index` of `event` against `state`.
///
/// `state` is left untouched; the caller swaps in `Resolution::state`.
///
/// # Errors
/// - `InvalidChoiceIndex` if the index is out of range or names a choice whose
///   talent requirement is unmet (such choices are never selectable).
/// - `InsufficientFunds` if the choice is money-gated and unaffordable.
pub fn resolve(
    state: &StatRecord,
    event: &Event,
    choice_index: usize,
    modifiers: &[TalentModifier],
) -> Result<Resolution> {
    let choice = event
        .choices
        .get(choice_index)
        .filter(|choice| choice.is_visible_to(state))
        .ok_or_else(|| EngineError::InvalidChoiceIndex {
            index: choice_index,
            available: event.visible_choices(state).count(),
        })?;

    if let Some(required) = choice.money_req {
        if state.money < required {
            return Err(EngineError::InsufficientFunds {
                required,
                available: state.money,
            });
        }
    }

    let mut patch = (choice.effect)(state);

    let ctx = ModifierContext {
        state,
        event,
        choice,
    };
    let mut applied_modifiers = Vec::new();
    for modifier in modifiers {
        if modifier.apply(&ctx, &mut patch) {
            applied_modifiers.push(modifier.name.clone());
        }
    }

    let mut next = state.clone();
    patch.apply_to(&mut next);
    next.event_count += 1;
    next.seen_events.insert(event.id.clone());
    if let Some(flag) = &choice.set_flag {
        next.flags.insert(flag.clone(), true);
    }
    if let Some(route) = choice.set_route {
        // A committed route is never replaced.
        if !next.route.is_set() {
            next.route = route;
        }
    }

    next.clamp_bounds();
    next.history.push(next.snapshot());

    let deltas = StatDeltas::between(state, &next);

    debug!(
        event = %event.id,
        choice = choice_index,
        turn = next.event_count,
        modifiers = ?applied_modifiers,
        "Choice resolved"
    );

    Ok(Resolution {
        state: next,
        deltas,
        result_text: choice.result_text.clone(),
        applied_modifiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use exile_rules::content::{modifiers, standard_catalog, ROUTE_SELECT_EVENT};
    use exile_rules::{Choice, ChoiceKind, EventId, Route, StatPatch, TalentId};

    fn spend_event() -> Event {
        Event::new("SPEND", "Spend", "Spend")
            .with_choice(
                Choice::new(
                    "Pay",
                    ChoiceKind::Normal,
                    |s| StatPatch::new().with_money(s.money - 500_000),
                    "Paid.",
                )
                .with_money_req(500_000),
            )
            .with_choice(
                Choice::new(
                    "Panic",
                    ChoiceKind::Aggressive,
                    |s| StatPatch::new().with_risk(s.risk + 250).with_sanity(s.sanity - 250).with_time(s.time - 100.0),
                    "Everything goes wrong.",
                )
                .sets_flag("panicked"),
            )
            .with_choice(
                Choice::new(
                    "Secret",
                    ChoiceKind::Talent,
                    |s| StatPatch::new().with_money(s.money + 1),
                    "Hidden.",
                )
                .with_talent_req("T06"),
            )
    }

    #[test]
    fn test_money_override_and_delta() {
        let state = StatRecord::default();
        let resolution = resolve(&state, &spend_event(), 0, &[]).unwrap();

        assert_eq!(resolution.state.money, 500_000);
        assert_eq!(resolution.deltas.money, Some(-500_000));
        assert_eq!(resolution.deltas.risk, None);
        assert_eq!(resolution.result_text, "Paid.");
        // The prior record is untouched.
        assert_eq!(state.money, 1_000_000);
    }

    #[test]
    fn test_bookkeeping() {
        let state = StatRecord::default();
        let resolution = resolve(&state, &spend_event(), 1, &[]).unwrap();
        let next = resolution.state;

        assert_eq!(next.event_count, 1);
        assert!(next.has_seen(&EventId::from("SPEND")));
        assert!(next.has_flag("panicked"));
        assert_eq!(next.history.len(), 2);
        assert_eq!(next.history[1].turn, 1);
        assert_eq!(next.history[1].risk, next.risk);
    }

    #[test]
    fn test_clamping_on_commit() {
        let state = StatRecord::default();
        let resolution = resolve(&state, &spend_event(), 1, &[]).unwrap();

        assert_eq!(resolution.state.risk, 100);
        assert_eq!(resolution.state.sanity, 0);
        assert_eq!(resolution.state.time, 0.0);
        assert_eq!(resolution.deltas.risk, Some(100));
        assert_eq!(resolution.deltas.sanity, Some(-100));
        assert_eq!(resolution.deltas.time, Some(-72.0));
        assert!(resolution.state.within_bounds());
    }

    #[test]
    fn test_invalid_index() {
        let state = StatRecord::default();
        let err = resolve(&state, &spend_event(), 7, &[]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidChoiceIndex { index: 7, available: 2 }
        ));
    }

    #[test]
    fn test_talent_gated_choice_not_resolvable() {
        let mut state = StatRecord::default();
        assert!(matches!(
            resolve(&state, &spend_event(), 2, &[]),
            Err(EngineError::InvalidChoiceIndex { index: 2, .. })
        ));

        state.talents.insert(TalentId::from("T06"));
        let resolution = resolve(&state, &spend_event(), 2, &[]).unwrap();
        assert_eq!(resolution.state.money, 1_000_001);
    }

    #[test]
    fn test_insufficient_funds() {
        let mut state = StatRecord::default();
        state.money = 100;

        let err = resolve(&state, &spend_event(), 0, &[]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientFunds { required: 500_000, available: 100 }
        ));
    }

    #[test]
    fn test_modifiers_apply_in_order() {
        let mut state = StatRecord::default();
        state.talents.insert(TalentId::from("T13"));
        let event = Event::new("GAIN", "Gain", "Gain").with_choice(Choice::new(
            "Take",
            ChoiceKind::Normal,
            |s| StatPatch::new().with_money(s.money + 50_000),
            "Taken.",
        ));

        let resolution = resolve(&state, &event, 0, &modifiers()).unwrap();
        assert_eq!(resolution.state.money, 1_150_000);
        assert_eq!(resolution.deltas.money, Some(150_000));
        assert_eq!(resolution.applied_modifiers, vec!["money printer".to_string()]);
    }

    #[test]
    fn test_route_committed_once() {
        let catalog = standard_catalog();
        let event = catalog.event(&EventId::from(ROUTE_SELECT_EVENT)).unwrap();
        let state = StatRecord::default();

        let first = resolve(&state, event, 1, catalog.modifiers()).unwrap();
        assert_eq!(first.state.route, Route::Jungle);

        let second = resolve(&first.state, event, 2, catalog.modifiers()).unwrap();
        assert_eq!(second.state.route, Route::Jungle);
    }
}

//! Property-based tests for engine invariants.
//!
//! Random runs are driven through the public session API with seeded RNGs,
//! so every failure reproduces from the shrunk inputs.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use exile_core::{
    eligible_events, evaluate, select_next, EngineConfig, Phase, Selection, Session,
};
use exile_rules::content::standard_catalog;
use exile_rules::{Route, StatRecord, STAT_MAX, STAT_MIN};

const TURN_LIMIT: usize = 1_000;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_route() -> impl Strategy<Value = Route> {
    prop_oneof![
        Just(Route::Unset),
        Just(Route::Barrio),
        Just(Route::Jungle),
        Just(Route::Bunker),
    ]
}

/// A mid-run record with arbitrary stats and some events already seen.
fn arb_state() -> impl Strategy<Value = StatRecord> {
    (
        0.0..72.0f64,
        -1_000_000..10_000_000i64,
        STAT_MIN..=STAT_MAX,
        STAT_MIN..=STAT_MAX,
        STAT_MIN..=STAT_MAX,
        arb_route(),
        1..40u32,
        prop::collection::vec(any::<bool>(), 32),
    )
        .prop_map(|(time, money, risk, sanity, health, route, event_count, seen_mask)| {
            let catalog = standard_catalog();
            let mut state = StatRecord::default();
            state.time = time;
            state.money = money;
            state.risk = risk;
            state.sanity = sanity;
            state.health = health;
            state.route = route;
            state.event_count = event_count;
            for (event, seen) in catalog.events().iter().zip(seen_mask) {
                if seen {
                    state.seen_events.insert(event.id.clone());
                }
            }
            state
        })
}

/// Play one run to the end, checking per-turn invariants along the way.
fn play(seed: u64, talent_pick: usize, picks: &[usize]) -> Result<StatRecord, TestCaseError> {
    let catalog = standard_catalog();
    let mut session =
        Session::with_rng(&catalog, EngineConfig::default(), ChaCha8Rng::seed_from_u64(seed))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

    session.start().map_err(|e| TestCaseError::fail(e.to_string()))?;
    let offered = session.offered_talents();
    let talent = offered[talent_pick % offered.len()].id.clone();
    session
        .choose_talent(&talent)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;

    let mut turn = 0;
    while session.phase() == Phase::GameLoop {
        prop_assert!(turn < TURN_LIMIT, "run did not terminate");
        let before = session.stats().clone();

        let view = session.view();
        let event = view.current_event.expect("an event is presented during the loop");
        let enabled: Vec<_> = event.choices.iter().filter(|c| c.enabled).collect();
        prop_assert!(!enabled.is_empty(), "{} offers nothing selectable", event.id);
        let index = enabled[picks[turn % picks.len()] % enabled.len()].index;

        let outcome = session
            .choose_option(index)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let after = &outcome.view.stats;

        prop_assert!(after.within_bounds());
        prop_assert!(after.time >= 0.0);
        prop_assert_eq!(after.event_count, before.event_count + 1);
        prop_assert!(after.seen_events.is_superset(&before.seen_events));
        prop_assert!(after.seen_events.contains(&event.id));
        prop_assert_eq!(after.history.len(), before.history.len() + 1);
        if before.route.is_set() {
            prop_assert_eq!(after.route, before.route);
        }

        session
            .finish_transition()
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        turn += 1;
    }

    prop_assert_eq!(session.phase(), Phase::GameOver);
    prop_assert!(session.ending().is_some());
    Ok(session.stats().clone())
}

// ---------------------------------------------------------------------------
// Property: every run reaches an ending with bounded stats throughout
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn runs_terminate_within_bounds(
        seed in any::<u64>(),
        talent_pick in 0..3usize,
        picks in prop::collection::vec(0..8usize, 1..32),
    ) {
        let final_state = play(seed, talent_pick, &picks)?;
        prop_assert!(final_state.within_bounds());
    }
}

// ---------------------------------------------------------------------------
// Property: same seed and same inputs give the same run
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn runs_are_reproducible(
        seed in any::<u64>(),
        talent_pick in 0..3usize,
        picks in prop::collection::vec(0..8usize, 1..16),
    ) {
        let first = play(seed, talent_pick, &picks)?;
        let second = play(seed, talent_pick, &picks)?;
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property: ending evaluation is idempotent
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn evaluate_is_idempotent(state in arb_state()) {
        let catalog = standard_catalog();
        let first = evaluate(&state, catalog.endings()).map(|e| e.id.clone());
        let second = evaluate(&state, catalog.endings()).map(|e| e.id.clone());
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property: candidate filtering
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn seen_one_shot_events_are_never_candidates(state in arb_state()) {
        let catalog = standard_catalog();
        for event in eligible_events(&state, &catalog) {
            prop_assert!(event.repeatable || !state.has_seen(&event.id));
            prop_assert!(event.condition_holds(&state));
        }
    }

    #[test]
    fn candidates_respect_route(state in arb_state()) {
        let catalog = standard_catalog();
        for event in eligible_events(&state, &catalog) {
            if let Some(route) = event.route {
                prop_assert_eq!(route, state.route);
            }
        }
    }

    #[test]
    fn out_of_time_always_ends(mut state in arb_state(), seed in any::<u64>()) {
        let catalog = standard_catalog();
        state.time = 0.0;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let selection = select_next(&state, &catalog, &mut rng)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(matches!(selection, Selection::Ending(_)));
    }

    #[test]
    fn selection_is_deterministic_per_seed(state in arb_state(), seed in any::<u64>()) {
        let catalog = standard_catalog();
        let first = select_next(&state, &catalog, &mut ChaCha8Rng::seed_from_u64(seed))
            .map(|s| (s.event_id().cloned(), s.ending_id().cloned()))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let second = select_next(&state, &catalog, &mut ChaCha8Rng::seed_from_u64(seed))
            .map(|s| (s.event_id().cloned(), s.ending_id().cloned()))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(first, second);
    }
}

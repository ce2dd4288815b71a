//! Event Selector - decides what the player sees next.
//!
//! Selection works as follows:
//! 1. **Endings**: if any ending matches, it wins and the run is over
//! 2. **Exhaustion**: out of time with no ending matched forces the fallback ending
//! 3. **Filtering**: keep events whose condition holds, that are repeatable or
//!    unseen, and whose route restriction (if any) matches the run
//! 4. **Tiering**: keep only candidates at the highest priority
//! 5. **Pick**: choose uniformly at random within that tier

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use exile_rules::{Catalog, Ending, EndingId, Event, EventId, StatRecord};

use crate::endings::evaluate;
use crate::error::{EngineError, Result};

/// The outcome of a selection step: an event to present or an ending to show.
#[derive(Debug, Clone, Copy)]
pub enum Selection<'a> {
    Event(&'a Event),
    Ending(&'a Ending),
}

impl<'a> Selection<'a> {
    /// The selected event, if the run continues.
    pub fn event(&self) -> Option<&'a Event> {
        match *self {
            Selection::Event(event) => Some(event),
            Selection::Ending(_) => None,
        }
    }

    /// The selected ending, if the run is over.
    pub fn ending(&self) -> Option<&'a Ending> {
        match *self {
            Selection::Ending(ending) => Some(ending),
            Selection::Event(_) => None,
        }
    }

    pub fn event_id(&self) -> Option<&'a EventId> {
        self.event().map(|e| &e.id)
    }

    pub fn ending_id(&self) -> Option<&'a EndingId> {
        self.ending().map(|e| &e.id)
    }
}

/// Check whether a single event may be presented for `state`.
pub fn is_eligible(event: &Event, state: &StatRecord) -> bool {
    event.condition_holds(state)
        && (event.repeatable || !state.has_seen(&event.id))
        && event.route_matches(state)
}

/// Every event that may be presented for `state`, in catalog order.
pub fn eligible_events<'a>(state: &StatRecord, catalog: &'a Catalog) -> Vec<&'a Event> {
    catalog
        .events()
        .iter()
        .filter(|event| is_eligible(event, state))
        .collect()
}

/// Keep only the candidates at the highest priority present.
pub fn top_priority_tier<'a>(candidates: &[&'a Event]) -> Vec<&'a Event> {
    let Some(top) = candidates.iter().map(|e| e.priority).max() else {
        return Vec::new();
    };
    candidates
        .iter()
        .copied()
        .filter(|e| e.priority == top)
        .collect()
}

fn fallback<'a>(catalog: &'a Catalog, reason: &'static str) -> Result<Selection<'a>> {
    match catalog.fallback_ending() {
        Some(ending) => {
            warn!(ending = %ending.id, reason, "Forcing fallback ending");
            Ok(Selection::Ending(ending))
        }
        None => Err(EngineError::NoEligibleEvent),
    }
}

/// Pick the next event, or the ending that stops the run.
///
/// Pure with respect to `state` and `catalog`; all randomness comes from `rng`.
///
/// # Errors
/// Returns `EngineError::NoEligibleEvent` when nothing can be presented and the
/// catalog has no fallback ending.
pub fn select_next<'a, R: Rng + ?Sized>(
    state: &StatRecord,
    catalog: &'a Catalog,
    rng: &mut R,
) -> Result<Selection<'a>> {
    if let Some(ending) = evaluate(state, catalog.endings()) {
        debug!(ending = %ending.id, turn = state.event_count, "Ending matched");
        return Ok(Selection::Ending(ending));
    }

    if state.out_of_time() {
        return fallback(catalog, "out of time");
    }

    let candidates = eligible_events(state, catalog);
    let tier = top_priority_tier(&candidates);

    match tier.choose(rng) {
        Some(&event) => {
            debug!(
                event = %event.id,
                candidates = candidates.len(),
                tier = tier.len(),
                priority = event.priority,
                "Event selected"
            );
            Ok(Selection::Event(event))
        }
        None => fallback(catalog, "no eligible event"),
    }
}

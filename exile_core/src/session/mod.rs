//! Session Controller - the phase machine presentation drives.
//!
//! ```text
//! START --begin--> TALENT_SELECT --pick--> GAME_LOOP --ending--> GAME_OVER
//!   ^  \                                    |    ^                  |
//!   |   '--> TALENT_INDEX (browse)          '----' choose           |
//!   '-------------------------- restart ----------------------------'
//! ```
//!
//! The session exclusively owns the Stat Record and replaces it wholesale on
//! every step, so a view taken at any point is a complete snapshot.

mod transition;
mod view;

pub use transition::*;
pub use view::*;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use exile_rules::{Catalog, Ending, EndingId, Event, EventId, StatRecord, Talent, TalentId};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::resolver::{apply_acquisition, resolve};
use crate::selector::{select_next, Selection};

/// Unique identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Start,
    /// Read-only browse of every talent.
    TalentIndex,
    TalentSelect,
    GameLoop,
    GameOver,
}

/// One player's run, from the title screen to an ending.
pub struct Session<'c, R = StdRng> {
    id: SessionId,
    catalog: &'c Catalog,
    config: EngineConfig,
    rng: R,
    phase: Phase,
    state: StatRecord,
    offered: Vec<TalentId>,
    refreshes_left: u32,
    current_event: Option<EventId>,
    last_result: Option<TurnResult>,
    transition: Option<Transition>,
    ending: Option<EndingId>,
}

impl<'c> Session<'c, StdRng> {
    /// Create a session with an entropy-seeded RNG.
    ///
    /// # Errors
    /// Fails if the catalog or the configuration is invalid.
    pub fn new(catalog: &'c Catalog, config: EngineConfig) -> Result<Self> {
        Self::with_rng(catalog, config, StdRng::from_entropy())
    }
}

impl<'c, R: Rng> Session<'c, R> {
    /// Create a session drawing all randomness from `rng`.
    ///
    /// # Errors
    /// Fails if the catalog or the configuration is invalid.
    pub fn with_rng(catalog: &'c Catalog, config: EngineConfig, rng: R) -> Result<Self> {
        catalog.validate()?;
        config.validate()?;

        let session = Self {
            id: SessionId::new(),
            state: StatRecord::new(&config.initial),
            refreshes_left: config.talents.refreshes,
            catalog,
            config,
            rng,
            phase: Phase::Start,
            offered: Vec::new(),
            current_event: None,
            last_result: None,
            transition: None,
            ending: None,
        };
        info!(session = %session.id, "Session created");
        Ok(session)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current Stat Record.
    pub fn stats(&self) -> &StatRecord {
        &self.state
    }

    /// The event on screen, if any.
    pub fn current_event(&self) -> Option<&'c Event> {
        self.current_event
            .as_ref()
            .and_then(|id| self.catalog.event(id))
    }

    /// The ending reached, if the run is over.
    pub fn ending(&self) -> Option<&'c Ending> {
        self.ending.as_ref().and_then(|id| self.catalog.ending(id))
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Talents currently offered for selection.
    pub fn offered_talents(&self) -> Vec<&'c Talent> {
        self.offered
            .iter()
            .filter_map(|id| self.catalog.talent(id))
            .collect()
    }

    /// Snapshot of everything presentation needs.
    pub fn view(&self) -> SessionView {
        SessionView {
            session: self.id,
            phase: self.phase,
            stats: self.state.clone(),
            offered_talents: self.offered_talents().into_iter().map(TalentView::new).collect(),
            refreshes_left: self.refreshes_left,
            current_event: self
                .current_event()
                .map(|event| EventView::new(event, &self.state)),
            last_result: self.last_result.clone(),
            transitioning: self.is_transitioning(),
            ending: self
                .ending()
                .map(|ending| EndingView::new(ending, &self.state, self.config.initial.time)),
        }
    }

    fn expect_phase(&self, operation: &'static str, allowed: &[Phase]) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            warn!(session = %self.id, operation, phase = ?self.phase, "Rejected operation");
            Err(EngineError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    /// Drop all run state and return to the title screen.
    fn reset(&mut self) {
        self.state = StatRecord::new(&self.config.initial);
        self.offered.clear();
        self.refreshes_left = self.config.talents.refreshes;
        self.current_event = None;
        self.last_result = None;
        self.transition = None;
        self.ending = None;
        self.phase = Phase::Start;
    }

    fn draw_offer(&mut self) {
        self.offered = self
            .catalog
            .talents()
            .choose_multiple(&mut self.rng, self.config.talents.offer_size)
            .map(|talent| talent.id.clone())
            .collect();
    }

    /// START (or GAME_OVER) -> TALENT_SELECT with a fresh record and offer.
    pub fn start(&mut self) -> Result<SessionView> {
        self.expect_phase("start a run", &[Phase::Start, Phase::GameOver])?;

        self.reset();
        self.draw_offer();
        self.phase = Phase::TalentSelect;

        info!(session = %self.id, offered = ?self.offered, "Run started");
        Ok(self.view())
    }

    /// Re-draw the talent offer, once per configured refresh.
    pub fn refresh_talents(&mut self) -> Result<Vec<&'c Talent>> {
        self.expect_phase("refresh talents", &[Phase::TalentSelect])?;
        if self.refreshes_left == 0 {
            return Err(EngineError::RefreshesExhausted);
        }

        self.refreshes_left -= 1;
        self.draw_offer();
        debug!(session = %self.id, offered = ?self.offered, "Talents refreshed");
        Ok(self.offered_talents())
    }

    /// START -> TALENT_INDEX. Returns a card for every talent in the catalog.
    pub fn open_talent_index(&mut self) -> Result<Vec<TalentView>> {
        self.expect_phase("open the talent index", &[Phase::Start])?;
        self.phase = Phase::TalentIndex;
        Ok(self.catalog.talents().iter().map(TalentView::new).collect())
    }

    /// TALENT_INDEX -> START.
    pub fn close_talent_index(&mut self) -> Result<SessionView> {
        self.expect_phase("close the talent index", &[Phase::TalentIndex])?;
        self.phase = Phase::Start;
        Ok(self.view())
    }

    /// TALENT_SELECT -> GAME_LOOP (or straight to GAME_OVER if the starting
    /// record already satisfies an ending).
    pub fn choose_talent(&mut self, id: &TalentId) -> Result<SessionView> {
        self.expect_phase("choose a talent", &[Phase::TalentSelect])?;
        if !self.offered.contains(id) {
            return Err(EngineError::TalentNotOffered(id.clone()));
        }

        self.state = apply_acquisition(&self.state, id, self.catalog);
        self.offered.clear();
        self.phase = Phase::GameLoop;
        info!(session = %self.id, talent = %id, "Talent chosen");

        self.present_next()?;
        Ok(self.view())
    }

    /// Resolve the `index`-th selectable choice of the current event.
    ///
    /// `index` counts only the choices in the view (talent-gated choices the
    /// player lacks are not counted). The next event is held back until the
    /// transition completes via [`advance`](Self::advance) or
    /// [`finish_transition`](Self::finish_transition).
    pub fn choose_option(&mut self, index: usize) -> Result<ChoiceOutcome> {
        self.expect_phase("choose an option", &[Phase::GameLoop])?;
        if self.transition.is_some() {
            return Err(EngineError::TransitionPending);
        }
        let event = self.current_event().ok_or(EngineError::NoActiveEvent)?;

        let (choice_index, _) = event
            .visible_choices(&self.state)
            .nth(index)
            .ok_or_else(|| EngineError::InvalidChoiceIndex {
                index,
                available: event.visible_choices(&self.state).count(),
            })?;

        let resolution = resolve(&self.state, event, choice_index, self.catalog.modifiers())?;

        let result = TurnResult {
            event: event.id.clone(),
            result_text: resolution.result_text,
            deltas: resolution.deltas,
            applied_modifiers: resolution.applied_modifiers,
        };
        self.state = resolution.state;
        self.current_event = None;
        self.last_result = Some(result.clone());

        let delay = self.config.pacing.transition_delay();
        self.transition = Some(Transition::new(delay));

        info!(
            session = %self.id,
            event = %result.event,
            turn = self.state.event_count,
            time = self.state.time,
            money = self.state.money,
            risk = self.state.risk,
            sanity = self.state.sanity,
            health = self.state.health,
            "Turn resolved"
        );

        Ok(ChoiceOutcome {
            result,
            transition_ms: self.config.pacing.transition_delay_ms,
            view: self.view(),
        })
    }

    /// Report elapsed real time to a pending transition.
    ///
    /// Returns the new view once the transition completes and the next event
    /// (or ending) is selected; `None` while it is still running.
    pub fn advance(&mut self, elapsed: Duration) -> Result<Option<SessionView>> {
        self.expect_phase("advance a transition", &[Phase::GameLoop])?;
        let Some(transition) = self.transition.as_mut() else {
            return Ok(None);
        };

        if !transition.advance(elapsed) {
            return Ok(None);
        }
        self.complete_transition().map(Some)
    }

    /// Skip the rest of a pending transition. With nothing pending this only
    /// returns the current view.
    pub fn finish_transition(&mut self) -> Result<SessionView> {
        self.expect_phase("finish a transition", &[Phase::GameLoop])?;
        if self.transition.is_none() {
            return Ok(self.view());
        }
        self.complete_transition()
    }

    fn complete_transition(&mut self) -> Result<SessionView> {
        self.transition = None;
        self.last_result = None;
        self.present_next()?;
        Ok(self.view())
    }

    /// GAME_OVER -> START, discarding the finished run.
    pub fn restart(&mut self) -> Result<SessionView> {
        self.expect_phase("restart", &[Phase::GameOver])?;
        self.reset();
        info!(session = %self.id, "Session restarted");
        Ok(self.view())
    }

    /// Give up from any phase. Discards the run and any pending transition.
    pub fn abandon(&mut self) -> SessionView {
        if self.phase != Phase::Start {
            info!(session = %self.id, phase = ?self.phase, "Run abandoned");
        }
        self.reset();
        self.view()
    }

    /// Run the selector and move to its outcome.
    fn present_next(&mut self) -> Result<()> {
        let selection = match select_next(&self.state, self.catalog, &mut self.rng) {
            Ok(selection) => selection,
            Err(EngineError::NoEligibleEvent) => {
                // Never stall: the last declared ending is the catch-all.
                let ending = self
                    .catalog
                    .endings()
                    .last()
                    .ok_or(EngineError::NoEligibleEvent)?;
                warn!(session = %self.id, ending = %ending.id, "No eligible event, forcing ending");
                Selection::Ending(ending)
            }
            Err(err) => return Err(err),
        };

        match selection {
            Selection::Event(event) => {
                debug!(session = %self.id, event = %event.id, "Presenting event");
                self.current_event = Some(event.id.clone());
            }
            Selection::Ending(ending) => {
                info!(
                    session = %self.id,
                    ending = %ending.id,
                    turns = self.state.event_count,
                    "Run over"
                );
                self.current_event = None;
                self.ending = Some(ending.id.clone());
                self.phase = Phase::GameOver;
            }
        }
        Ok(())
    }
}

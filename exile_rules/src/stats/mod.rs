//! Stat Record - the versioned snapshot of one run's progress.

mod patch;

pub use patch::*;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::catalog::{EventId, TalentId};

/// Lower bound for bounded stats.
pub const STAT_MIN: i32 = 0;
/// Upper bound for bounded stats (risk, sanity, health).
pub const STAT_MAX: i32 = 100;

/// Mutually exclusive story branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Route {
    /// No branch committed yet.
    #[default]
    Unset,
    /// Route A: lying low in the slums.
    Barrio,
    /// Route B: crossing the jungle.
    Jungle,
    /// Route C: holding out in the bunker.
    Bunker,
}

impl Route {
    /// Whether a branch has been committed.
    pub fn is_set(&self) -> bool {
        !matches!(self, Route::Unset)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Route::Unset => "unset",
            Route::Barrio => "A",
            Route::Jungle => "B",
            Route::Bunker => "C",
        };
        write!(f, "{}", name)
    }
}

/// One point of the per-turn history, kept for end-of-run charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub turn: u32,
    pub risk: i32,
    pub money: i64,
    pub sanity: i32,
    pub health: i32,
}

/// Starting values for a fresh run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialStats {
    /// Hours remaining.
    #[serde(default = "default_time")]
    pub time: f64,
    #[serde(default = "default_money")]
    pub money: i64,
    #[serde(default)]
    pub risk: i32,
    #[serde(default = "default_full")]
    pub sanity: i32,
    #[serde(default = "default_full")]
    pub health: i32,
    #[serde(default)]
    pub karma: i64,
    #[serde(default)]
    pub fans: i64,
}

fn default_time() -> f64 {
    72.0
}

fn default_money() -> i64 {
    1_000_000
}

fn default_full() -> i32 {
    STAT_MAX
}

impl Default for InitialStats {
    fn default() -> Self {
        Self {
            time: default_time(),
            money: default_money(),
            risk: 0,
            sanity: default_full(),
            health: default_full(),
            karma: 0,
            fans: 0,
        }
    }
}

/// The complete progress of a run at one point in time.
///
/// Each turn produces a new record rather than editing the old one in place,
/// so a sequence of records doubles as an undo/replay log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    /// Hours remaining, floored at 0.
    pub time: f64,
    /// May go negative.
    pub money: i64,
    /// Exposure level, 0-100.
    pub risk: i32,
    /// 0-100.
    pub sanity: i32,
    /// 0-100.
    pub health: i32,
    pub karma: i64,
    pub fans: i64,

    /// Talents acquired this run.
    pub talents: HashSet<TalentId>,

    /// Story decisions used to gate chain events.
    pub flags: HashMap<String, bool>,

    /// Events already presented. Only grows.
    pub seen_events: HashSet<EventId>,

    /// Committed story branch.
    pub route: Route,

    /// Number of resolved turns.
    pub event_count: u32,

    /// One entry per turn, starting with the initial snapshot.
    pub history: Vec<HistoryEntry>,
}

impl StatRecord {
    /// Create the record for a fresh run.
    pub fn new(initial: &InitialStats) -> Self {
        let mut record = Self {
            time: initial.time,
            money: initial.money,
            risk: initial.risk,
            sanity: initial.sanity,
            health: initial.health,
            karma: initial.karma,
            fans: initial.fans,
            talents: HashSet::new(),
            flags: HashMap::new(),
            seen_events: HashSet::new(),
            route: Route::Unset,
            event_count: 0,
            history: Vec::new(),
        };
        record.clamp_bounds();
        record.history.push(record.snapshot());
        record
    }

    /// Check whether a talent has been acquired.
    pub fn has_talent(&self, id: &TalentId) -> bool {
        self.talents.contains(id)
    }

    /// Check whether a story flag is set.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Check whether an event has already been presented.
    pub fn has_seen(&self, id: &EventId) -> bool {
        self.seen_events.contains(id)
    }

    /// Whether the clock has run out.
    pub fn out_of_time(&self) -> bool {
        self.time <= 0.0
    }

    /// Force the bounded stats back into range.
    pub fn clamp_bounds(&mut self) {
        self.risk = self.risk.clamp(STAT_MIN, STAT_MAX);
        self.sanity = self.sanity.clamp(STAT_MIN, STAT_MAX);
        self.health = self.health.clamp(STAT_MIN, STAT_MAX);
        self.time = self.time.max(0.0);
    }

    /// Whether every bounded stat is within range.
    pub fn within_bounds(&self) -> bool {
        let bounded = STAT_MIN..=STAT_MAX;
        bounded.contains(&self.risk)
            && bounded.contains(&self.sanity)
            && bounded.contains(&self.health)
            && self.time >= 0.0
    }

    /// History point for the current values.
    pub fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            turn: self.event_count,
            risk: self.risk,
            money: self.money,
            sanity: self.sanity,
            health: self.health,
        }
    }
}

impl Default for StatRecord {
    fn default() -> Self {
        Self::new(&InitialStats::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_uses_initial_values() {
        let record = StatRecord::default();

        assert_eq!(record.time, 72.0);
        assert_eq!(record.money, 1_000_000);
        assert_eq!(record.risk, 0);
        assert_eq!(record.sanity, 100);
        assert_eq!(record.route, Route::Unset);
        assert_eq!(record.history.len(), 1);
        assert_eq!(record.history[0].turn, 0);
    }

    #[test]
    fn test_clamp_bounds() {
        let mut record = StatRecord::default();
        record.risk = 140;
        record.sanity = -20;
        record.health = 101;
        record.time = -1.5;
        record.money = -50;

        assert!(!record.within_bounds());
        record.clamp_bounds();

        assert_eq!(record.risk, 100);
        assert_eq!(record.sanity, 0);
        assert_eq!(record.health, 100);
        assert_eq!(record.time, 0.0);
        // Money is unbounded.
        assert_eq!(record.money, -50);
        assert!(record.within_bounds());
    }

    #[test]
    fn test_flags_default_false() {
        let mut record = StatRecord::default();
        assert!(!record.has_flag("met_hacker"));

        record.flags.insert("met_hacker".to_string(), true);
        assert!(record.has_flag("met_hacker"));
    }

    #[test]
    fn test_initial_stats_from_partial_input() {
        let initial: InitialStats = serde_json::from_str(r#"{ "money": 5 }"#).unwrap();
        assert_eq!(initial.money, 5);
        assert_eq!(initial.time, 72.0);
        assert_eq!(initial.health, 100);
    }

    #[test]
    fn test_route_display() {
        assert_eq!(Route::Barrio.to_string(), "A");
        assert!(!Route::Unset.is_set());
        assert!(Route::Bunker.is_set());
    }
}

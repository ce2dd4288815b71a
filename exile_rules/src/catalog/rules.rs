//! Talent rule tables.
//!
//! Talents change the game in two ways, both declared as data:
//! - **Acquire rules** run once, when the talent is picked.
//! - **Modifiers** run on every choice resolution while the talent is held,
//!   adjusting the effect's patch before it is merged.

use super::{Choice, Event, TalentId};
use crate::stats::{StatPatch, StatRecord};

/// Everything a modifier may inspect about the resolution in progress.
#[derive(Debug, Clone, Copy)]
pub struct ModifierContext<'a> {
    /// The record before the choice resolves.
    pub state: &'a StatRecord,
    pub event: &'a Event,
    pub choice: &'a Choice,
}

/// Predicate deciding whether a modifier fires for this patch.
pub type ModifierPredicate = fn(&ModifierContext<'_>, &StatPatch) -> bool;

/// Rewrites the patch in place.
pub type ModifierTransform = fn(&ModifierContext<'_>, &mut StatPatch);

/// A per-turn `(talent, predicate, transform)` rule.
#[derive(Clone)]
pub struct TalentModifier {
    pub talent: TalentId,
    /// Short name for logs.
    pub name: String,
    pub predicate: ModifierPredicate,
    pub transform: ModifierTransform,
}

impl TalentModifier {
    pub fn new(
        talent: impl Into<TalentId>,
        name: impl Into<String>,
        predicate: ModifierPredicate,
        transform: ModifierTransform,
    ) -> Self {
        Self {
            talent: talent.into(),
            name: name.into(),
            predicate,
            transform,
        }
    }

    /// Apply the rule if the talent is held and the predicate holds.
    ///
    /// Returns whether the transform ran.
    pub fn apply(&self, ctx: &ModifierContext<'_>, patch: &mut StatPatch) -> bool {
        if !ctx.state.has_talent(&self.talent) || !(self.predicate)(ctx, patch) {
            return false;
        }
        (self.transform)(ctx, patch);
        true
    }
}

impl std::fmt::Debug for TalentModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TalentModifier")
            .field("talent", &self.talent)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A one-time adjustment applied when a talent is acquired.
#[derive(Clone)]
pub struct AcquireRule {
    pub talent: TalentId,
    pub effect: fn(&StatRecord) -> StatPatch,
}

impl AcquireRule {
    pub fn new(talent: impl Into<TalentId>, effect: fn(&StatRecord) -> StatPatch) -> Self {
        Self {
            talent: talent.into(),
            effect,
        }
    }
}

impl std::fmt::Debug for AcquireRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcquireRule")
            .field("talent", &self.talent)
            .finish_non_exhaustive()
    }
}

//! Event and choice definitions.

use serde::Serialize;

use super::{ChoiceKind, EventId, EventTag, TalentId};
use crate::stats::{Route, StatPatch, StatRecord};

/// Gating predicate over the Stat Record. Must be pure.
pub type Condition = fn(&StatRecord) -> bool;

/// A choice's effect: absolute overrides for the stats it names. Must be total.
pub type Effect = fn(&StatRecord) -> StatPatch;

/// A selectable option on an event.
#[derive(Clone, Serialize)]
pub struct Choice {
    pub text: String,
    pub kind: ChoiceKind,
    /// Hidden entirely unless this talent is held.
    pub talent_req: Option<TalentId>,
    /// Shown but disabled while money is below this amount.
    pub money_req: Option<i64>,
    /// Flag set to true when the choice resolves.
    pub set_flag: Option<String>,
    /// Route committed when the choice resolves.
    pub set_route: Option<Route>,
    #[serde(skip)]
    pub effect: Effect,
    pub result_text: String,
}

impl Choice {
    /// Create a new choice.
    pub fn new(
        text: impl Into<String>,
        kind: ChoiceKind,
        effect: Effect,
        result_text: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            kind,
            talent_req: None,
            money_req: None,
            set_flag: None,
            set_route: None,
            effect,
            result_text: result_text.into(),
        }
    }

    pub fn with_talent_req(mut self, talent: impl Into<TalentId>) -> Self {
        self.talent_req = Some(talent.into());
        self
    }

    pub fn with_money_req(mut self, amount: i64) -> Self {
        self.money_req = Some(amount);
        self
    }

    pub fn sets_flag(mut self, key: impl Into<String>) -> Self {
        self.set_flag = Some(key.into());
        self
    }

    pub fn sets_route(mut self, route: Route) -> Self {
        self.set_route = Some(route);
        self
    }

    /// Whether the choice is offered at all (talent gate).
    pub fn is_visible_to(&self, state: &StatRecord) -> bool {
        self.talent_req
            .as_ref()
            .map_or(true, |talent| state.has_talent(talent))
    }

    /// Whether the player can currently pay for the choice (money gate).
    pub fn is_affordable(&self, state: &StatRecord) -> bool {
        self.money_req.map_or(true, |required| state.money >= required)
    }
}

impl std::fmt::Debug for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Choice")
            .field("text", &self.text)
            .field("kind", &self.kind)
            .field("talent_req", &self.talent_req)
            .field("money_req", &self.money_req)
            .field("set_flag", &self.set_flag)
            .field("set_route", &self.set_route)
            .finish_non_exhaustive()
    }
}

/// A presentable situation with one or more choices.
#[derive(Clone, Serialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub tags: Vec<EventTag>,
    #[serde(skip)]
    pub condition: Option<Condition>,
    /// Only offered while the run is on this route.
    pub route: Option<Route>,
    /// Higher wins when several events are eligible.
    pub priority: i32,
    /// Non-repeatable events never return once seen.
    pub repeatable: bool,
    pub choices: Vec<Choice>,
}

impl Event {
    /// Create a new event with no tags, no gating, and no choices.
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags: Vec::new(),
            condition: None,
            route: None,
            priority: 0,
            repeatable: false,
            choices: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = EventTag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn on_route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Check if the event carries a tag.
    pub fn has_tag(&self, tag: &EventTag) -> bool {
        self.tags.contains(tag)
    }

    /// Whether the gating condition (if any) holds.
    pub fn condition_holds(&self, state: &StatRecord) -> bool {
        self.condition.map_or(true, |condition| condition(state))
    }

    /// Whether the route restriction (if any) matches the run.
    pub fn route_matches(&self, state: &StatRecord) -> bool {
        self.route.map_or(true, |route| route == state.route)
    }

    /// An always-eligible fallback: repeatable, ungated, unrestricted.
    pub fn is_filler(&self) -> bool {
        self.repeatable && self.condition.is_none() && self.route.is_none()
    }

    /// Choices the player may see, paired with their index in `choices`.
    pub fn visible_choices<'a>(
        &'a self,
        state: &'a StatRecord,
    ) -> impl Iterator<Item = (usize, &'a Choice)> + 'a {
        self.choices
            .iter()
            .enumerate()
            .filter(move |(_, choice)| choice.is_visible_to(state))
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("tags", &self.tags)
            .field("gated", &self.condition.is_some())
            .field("route", &self.route)
            .field("priority", &self.priority)
            .field("repeatable", &self.repeatable)
            .field("choices", &self.choices)
            .finish()
    }
}

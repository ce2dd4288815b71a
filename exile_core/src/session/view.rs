//! Read-only snapshots handed to presentation.

use serde::{Deserialize, Serialize};

use exile_rules::{
    ChoiceKind, Ending, EndingId, Event, EventId, EventTag, HistoryEntry, Rarity, StatDeltas,
    StatRecord, Talent, TalentCategory, TalentId,
};

use super::{Phase, SessionId};

/// Everything presentation needs to draw the current screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub session: SessionId,
    pub phase: Phase,
    /// Snapshot of the Stat Record.
    pub stats: StatRecord,
    /// Talents to pick from (TALENT_SELECT only).
    pub offered_talents: Vec<TalentView>,
    pub refreshes_left: u32,
    /// The event on screen, with only its selectable choices.
    pub current_event: Option<EventView>,
    /// The last resolved choice, while its result is on screen.
    pub last_result: Option<TurnResult>,
    /// Whether the next event is still being held back.
    pub transitioning: bool,
    pub ending: Option<EndingView>,
}

impl SessionView {
    /// Render the view as JSON for presentation layers outside Rust.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A talent card, for the offer and the talent index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentView {
    pub id: TalentId,
    pub name: String,
    pub category: TalentCategory,
    pub category_label: String,
    pub rarity: Rarity,
    pub description: String,
}

impl TalentView {
    pub fn new(talent: &Talent) -> Self {
        Self {
            id: talent.id.clone(),
            name: talent.name.clone(),
            category: talent.category,
            category_label: talent.category.label().to_string(),
            rarity: talent.rarity,
            description: talent.description.clone(),
        }
    }
}

/// An event as the player sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventView {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub tags: Vec<EventTag>,
    /// Talent-gated choices the player lacks are already removed.
    pub choices: Vec<ChoiceView>,
}

impl EventView {
    pub fn new(event: &Event, state: &StatRecord) -> Self {
        let choices = event
            .visible_choices(state)
            .enumerate()
            .map(|(index, (_, choice))| ChoiceView {
                index,
                text: choice.text.clone(),
                kind: choice.kind,
                money_req: choice.money_req,
                enabled: choice.is_affordable(state),
            })
            .collect();

        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            tags: event.tags.clone(),
            choices,
        }
    }
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceView {
    /// Position among the visible choices; what `choose_option` expects.
    pub index: usize,
    pub text: String,
    pub kind: ChoiceKind,
    pub money_req: Option<i64>,
    /// False when a money requirement is unmet.
    pub enabled: bool,
}

/// What the last choice did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub event: EventId,
    pub result_text: String,
    pub deltas: StatDeltas,
    pub applied_modifiers: Vec<String>,
}

/// Returned by `choose_option`: the result plus the screen during the pause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOutcome {
    pub result: TurnResult,
    /// Length of the pause before the next event, in milliseconds.
    pub transition_ms: u64,
    pub view: SessionView,
}

/// The end-of-run screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndingView {
    pub id: EndingId,
    pub title: String,
    pub description: String,
    pub final_stats: StatRecord,
    /// Hours between the starting clock and what was left.
    pub hours_survived: f64,
    /// Per-turn snapshots for charting.
    pub history: Vec<HistoryEntry>,
}

impl EndingView {
    pub fn new(ending: &Ending, state: &StatRecord, starting_time: f64) -> Self {
        Self {
            id: ending.id.clone(),
            title: ending.title.clone(),
            description: ending.description.clone(),
            final_stats: state.clone(),
            hours_survived: (starting_time - state.time).max(0.0),
            history: state.history.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exile_rules::content::standard_catalog;

    #[test]
    fn test_event_view_filters_and_flags_choices() {
        let catalog = standard_catalog();
        let event = catalog.event(&EventId::from("B01_COYOTE")).unwrap();
        let mut state = StatRecord::default();
        state.money = 100;

        let view = EventView::new(event, &state);
        assert_eq!(view.choices.len(), 2);
        assert!(!view.choices[0].enabled);
        assert_eq!(view.choices[0].money_req, Some(500_000));
        assert_eq!(view.choices[1].index, 1);
        assert_eq!(view.choices[1].kind, ChoiceKind::Stealth);

        state.talents.insert(TalentId::from("T10"));
        let view = EventView::new(event, &state);
        assert_eq!(view.choices.len(), 3);
        assert_eq!(view.choices[1].index, 1);
        assert_eq!(view.choices[1].kind, ChoiceKind::Talent);
        assert!(view.choices[1].enabled);
    }

    #[test]
    fn test_talent_view_carries_category_label() {
        let catalog = standard_catalog();
        let talent = catalog.talent(&TalentId::from("T07")).unwrap();

        let view = TalentView::new(talent);
        assert_eq!(view.id, talent.id);
        assert_eq!(view.category, talent.category);
        assert_eq!(view.category_label, talent.category.label());
    }

    #[test]
    fn test_ending_view_hours_survived() {
        let catalog = standard_catalog();
        let ending = catalog.ending(&EndingId::from("E_BROKE")).unwrap();
        let mut state = StatRecord::default();
        state.time = 30.5;

        let view = EndingView::new(ending, &state, 72.0);
        assert_eq!(view.hours_survived, 41.5);
        assert_eq!(view.history.len(), 1);
    }
}

//! Talent rule tables: per-turn modifiers and one-time acquire rules.

use crate::catalog::{AcquireRule, ChoiceKind, EventTag, TalentModifier};
use crate::stats::{Route, StatPatch};

/// Flat bonus added to every money gain by the Money Printer.
pub const PRINTER_BONUS: i64 = 100_000;

/// Hours refunded from every time cost by Time Management.
pub const TIME_REFUND: f64 = 0.5;

/// Largest sanity loss Cold Blood lets through.
pub const COLD_BLOOD_CAP: i32 = 5;

/// Per-turn modifiers, evaluated in this order.
pub fn modifiers() -> Vec<TalentModifier> {
    vec![
        TalentModifier::new(
            "T13",
            "money printer",
            |ctx, patch| patch.money_change(ctx.state).is_some_and(|d| d > 0),
            |_, patch| {
                if let Some(money) = patch.money.as_mut() {
                    *money += PRINTER_BONUS;
                }
            },
        ),
        TalentModifier::new(
            "T07",
            "time management",
            |ctx, patch| patch.time_change(ctx.state).is_some_and(|d| d < 0.0),
            |ctx, patch| {
                if let Some(time) = patch.time.as_mut() {
                    // A refund never turns a cost into a gain.
                    *time = (*time + TIME_REFUND).min(ctx.state.time);
                }
            },
        ),
        TalentModifier::new(
            "T05",
            "honest man",
            |ctx, patch| patch.money_change(ctx.state).is_some_and(|d| d < 0),
            |ctx, patch| {
                if let Some(loss) = patch.money_change(ctx.state) {
                    patch.money = Some(ctx.state.money + loss * 6 / 5);
                }
            },
        ),
        TalentModifier::new(
            "T12",
            "cold blood",
            |ctx, patch| patch.sanity_change(ctx.state).is_some_and(|d| d < -COLD_BLOOD_CAP),
            |ctx, patch| patch.sanity = Some(ctx.state.sanity - COLD_BLOOD_CAP),
        ),
        TalentModifier::new(
            "T04",
            "bunker architect",
            |ctx, patch| {
                ctx.state.route == Route::Bunker
                    && patch.sanity_change(ctx.state).is_some_and(|d| d < 0)
            },
            |ctx, patch| {
                if let Some(loss) = patch.sanity_change(ctx.state) {
                    patch.sanity = Some(ctx.state.sanity + loss / 2);
                }
            },
        ),
        TalentModifier::new(
            "T03",
            "influencer",
            |ctx, patch| patch.fans_change(ctx.state).is_some_and(|d| d > 0),
            |ctx, patch| {
                if let Some(gain) = patch.fans_change(ctx.state) {
                    patch.fans = Some(ctx.state.fans + gain * 2);
                }
            },
        ),
        TalentModifier::new(
            "T11",
            "orator",
            |ctx, _| ctx.state.sanity > 0 && ctx.event.has_tag(&EventTag::Social),
            |ctx, patch| {
                if let Some(gain) = patch.money_change(ctx.state).filter(|d| *d > 0) {
                    patch.money = Some(ctx.state.money + gain * 2);
                }
                if let Some(gain) = patch.fans_change(ctx.state).filter(|d| *d > 0) {
                    patch.fans = Some(ctx.state.fans + gain * 2);
                }
            },
        ),
        TalentModifier::new(
            "T10",
            "ex-special forces",
            |ctx, patch| {
                ctx.choice.kind == ChoiceKind::Aggressive
                    && patch.health_change(ctx.state).is_some_and(|d| d < 0)
            },
            |ctx, patch| patch.health = Some(ctx.state.health),
        ),
        TalentModifier::new(
            "T01",
            "iron stomach",
            |ctx, patch| {
                ctx.event.has_tag(&EventTag::Food)
                    && patch.health_change(ctx.state).is_some_and(|d| d > 0)
            },
            |ctx, patch| {
                if let Some(gain) = patch.health_change(ctx.state) {
                    patch.health = Some(ctx.state.health + gain * 2);
                }
            },
        ),
    ]
}

/// One-time adjustments applied when a talent is picked.
pub fn acquire_rules() -> Vec<AcquireRule> {
    vec![
        AcquireRule::new("T02", |_| StatPatch::new().with_money(6_000_000).with_risk(20)),
        AcquireRule::new("T09", |s| StatPatch::new().with_risk(s.risk + 10)),
    ]
}

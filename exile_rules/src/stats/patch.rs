//! Stat patches (what a choice writes) and stat deltas (what the player sees).

use serde::{Deserialize, Serialize};

use super::StatRecord;

/// Absolute replacement values for the stats an effect names.
///
/// Fields left as `None` keep their prior value. Values may be out of range;
/// the resolver clamps them when the new record is committed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub karma: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fans: Option<i64>,
}

impl StatPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_money(mut self, money: i64) -> Self {
        self.money = Some(money);
        self
    }

    pub fn with_risk(mut self, risk: i32) -> Self {
        self.risk = Some(risk);
        self
    }

    pub fn with_sanity(mut self, sanity: i32) -> Self {
        self.sanity = Some(sanity);
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_karma(mut self, karma: i64) -> Self {
        self.karma = Some(karma);
        self
    }

    pub fn with_fans(mut self, fans: i64) -> Self {
        self.fans = Some(fans);
        self
    }

    /// Whether the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write the named fields over `record`.
    pub fn apply_to(&self, record: &mut StatRecord) {
        if let Some(time) = self.time {
            record.time = time;
        }
        if let Some(money) = self.money {
            record.money = money;
        }
        if let Some(risk) = self.risk {
            record.risk = risk;
        }
        if let Some(sanity) = self.sanity {
            record.sanity = sanity;
        }
        if let Some(health) = self.health {
            record.health = health;
        }
        if let Some(karma) = self.karma {
            record.karma = karma;
        }
        if let Some(fans) = self.fans {
            record.fans = fans;
        }
    }

    /// Implied money change relative to `prior`, if the patch names money.
    pub fn money_change(&self, prior: &StatRecord) -> Option<i64> {
        self.money.map(|money| money - prior.money)
    }

    /// Implied time change relative to `prior`, if the patch names time.
    pub fn time_change(&self, prior: &StatRecord) -> Option<f64> {
        self.time.map(|time| time - prior.time)
    }

    /// Implied sanity change relative to `prior`, if the patch names sanity.
    pub fn sanity_change(&self, prior: &StatRecord) -> Option<i32> {
        self.sanity.map(|sanity| sanity - prior.sanity)
    }

    /// Implied health change relative to `prior`, if the patch names health.
    pub fn health_change(&self, prior: &StatRecord) -> Option<i32> {
        self.health.map(|health| health - prior.health)
    }

    /// Implied fan change relative to `prior`, if the patch names fans.
    pub fn fans_change(&self, prior: &StatRecord) -> Option<i64> {
        self.fans.map(|fans| fans - prior.fans)
    }
}

/// Per-stat change between two records. Only changed fields are `Some`.
///
/// Presentation-only; never stored in the record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatDeltas {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub karma: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fans: Option<i64>,
}

fn changed<T: PartialEq + Copy + std::ops::Sub<Output = T>>(prior: T, next: T) -> Option<T> {
    if prior == next {
        None
    } else {
        Some(next - prior)
    }
}

impl StatDeltas {
    /// Compute `next - prior` for every numeric stat that changed.
    pub fn between(prior: &StatRecord, next: &StatRecord) -> Self {
        Self {
            time: changed(prior.time, next.time),
            money: changed(prior.money, next.money),
            risk: changed(prior.risk, next.risk),
            sanity: changed(prior.sanity, next.sanity),
            health: changed(prior.health, next.health),
            karma: changed(prior.karma, next.karma),
            fans: changed(prior.fans, next.fans),
        }
    }

    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

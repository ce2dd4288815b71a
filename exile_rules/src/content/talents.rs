//! Talent table.

use crate::catalog::{Rarity, Talent, TalentCategory};

pub fn talents() -> Vec<Talent> {
    vec![
        Talent::new("T01", "Iron Stomach", TalentCategory::Survival, Rarity::Rare)
            .with_description("Eats frogs in the jungle and expired cans in the slums. Healing from food events is doubled."),
        Talent::new("T02", "Swiss Account", TalentCategory::Resource, Rarity::Legendary)
            .with_description("Start with an extra $5M. The account gets frozen a lot, but a starved camel is still bigger than a horse."),
        Talent::new("T03", "Influencer", TalentCategory::Social, Rarity::Common)
            .with_description("Every post goes twice as far. Infamy is still fame: fan gains are doubled."),
        Talent::new("T04", "Bunker Architect", TalentCategory::Skill, Rarity::Rare)
            .with_description("In the bunker (Route C) sanity losses are halved."),
        Talent::new("T05", "Honest Man", TalentCategory::Social, Rarity::Common)
            .with_description("Easy mark for scams: money losses are 20% larger. Checkpoints wave you through."),
        Talent::new("T06", "Matrix", TalentCategory::Skill, Rarity::Legendary)
            .with_description("Fluent in crypto and cyberwarfare. Unlocks hidden options in digital events."),
        Talent::new("T07", "Time Management", TalentCategory::Time, Rarity::Rare)
            .with_description("Every event that costs time costs half an hour less. Even a fugitive needs efficiency."),
        Talent::new("T08", "Vanity Number", TalentCategory::Social, Rarity::Common)
            .with_description("Your phone number is too prestigious. Scam texts turn into windfalls, but you are easy to trace."),
        Talent::new("T09", "Persecution Complex", TalentCategory::Skill, Rarity::Common)
            .with_description("Start with 10 more exposure, but you can see the risk of every option coming."),
        Talent::new("T10", "Ex-Special Forces", TalentCategory::Skill, Rarity::Rare)
            .with_description("Fights and breakouts never cost you health."),
        Talent::new("T11", "Orator", TalentCategory::Social, Rarity::Legendary)
            .with_description("As long as some sanity remains you can talk anyone around. Gains from social events are doubled."),
        Talent::new("T12", "Cold Blood", TalentCategory::Special, Rarity::Rare)
            .with_description("Whatever tragedy strikes, you never lose more than 5 sanity at once."),
        Talent::new("T13", "Money Printer", TalentCategory::Resource, Rarity::Legendary)
            .with_description("Whenever money comes in, another $100k comes with it."),
    ]
}

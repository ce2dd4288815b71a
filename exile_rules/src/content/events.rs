//! Event table.

use crate::catalog::{Choice, ChoiceKind, Event, EventTag};
use crate::stats::{Route, StatPatch};

/// Always-eligible event that keeps the loop moving.
pub const FILLER_EVENT: &str = "U01_HUNGRY";

/// The opening event that commits the run to a route.
pub const ROUTE_SELECT_EVENT: &str = "E100_START";

pub fn events() -> Vec<Event> {
    let mut events = vec![filler(), route_select()];
    events.extend(global());
    events.extend(barrio());
    events.extend(jungle());
    events.extend(bunker());
    events.extend(low_sanity());
    events
}

fn filler() -> Event {
    Event::new(
        FILLER_EVENT,
        "The Long Wait",
        "Nothing is happening for now. You hide in a corner and your stomach starts to growl. Every passing hour makes you more anxious.",
    )
    .with_tags([EventTag::Survival, EventTag::Time])
    .repeatable()
    .with_choice(Choice::new(
        "Rest where you are",
        ChoiceKind::Safe,
        |s| StatPatch::new().with_time(s.time - 1.0).with_health(s.health + 2).with_sanity(s.sanity - 2),
        "You close your eyes for a while. Your body recovers a little, but the dread grows.",
    ))
    .with_choice(Choice::new(
        "Look at old photos",
        ChoiceKind::Normal,
        |s| StatPatch::new().with_time(s.time - 1.0).with_sanity(s.sanity + 5),
        "Parade photos from the old days. Your lost youth.",
    ))
}

fn route_select() -> Event {
    Event::new(
        ROUTE_SELECT_EVENT,
        "The Last 72 Hours",
        "Sirens wail and the palace is in chaos. There are three things on your desk you can take with you, and each one decides how you run.",
    )
    .with_tags([EventTag::City, EventTag::Danger])
    .with_priority(100)
    .with_condition(|s| s.route == Route::Unset && s.event_count == 0)
    .with_choice(
        Choice::new(
            "Keys to the armored Mercedes",
            ChoiceKind::Aggressive,
            |s| StatPatch::new().with_time(s.time - 1.0).with_risk(20),
            "Route A: King of the Barrio. Use the crowds and the gangs to vanish into the chaos.",
        )
        .sets_route(Route::Barrio),
    )
    .with_choice(
        Choice::new(
            "Old combat boots and a machete",
            ChoiceKind::Stealth,
            |s| StatPatch::new().with_time(s.time - 1.0).with_health(s.health - 5),
            "Route B: Law of the Jungle. Cross the Darien Gap and live like an animal.",
        )
        .sets_route(Route::Jungle),
    )
    .with_choice(
        Choice::new(
            "The nuclear briefcase",
            ChoiceKind::Special,
            |s| StatPatch::new().with_time(s.time - 1.0).with_sanity(s.sanity - 10),
            "Route C: Bunker Tyrant. Hold the underground shelter and wait for reinforcements that will never come.",
        )
        .sets_route(Route::Bunker),
    )
}

fn global() -> Vec<Event> {
    vec![
        Event::new(
            "G01_MUSK",
            "Mocked by a Billionaire",
            "A tech billionaire posts a meme of you photoshopped as a clown: \"DOGE coin is more stable than his regime.\"",
        )
        .with_tags([EventTag::Digital, EventTag::Social])
        .with_choice(Choice::new(
            "Fire back",
            ChoiceKind::Aggressive,
            |s| StatPatch::new().with_risk(s.risk + 10).with_fans(s.fans + 50_000).with_time(s.time - 1.0),
            "You reply with a curse. Your IP leaks, but your follower count explodes.",
        ))
        .with_choice(Choice::new(
            "Quietly block him",
            ChoiceKind::Safe,
            |s| StatPatch::new().with_sanity(s.sanity - 5).with_time(s.time - 0.5),
            "You turn off the screen. You have never felt this alone.",
        )),
        Event::new(
            "G02_DEEPFAKE",
            "Deepfake Hustle",
            "You scroll past a livestream of \"yourself\". An AI-generated you tearfully sells Exile brand shampoo. Thirty thousand people have ordered.",
        )
        .with_tags([EventTag::Digital, EventTag::Scam])
        .with_choice(
            Choice::new(
                "If it works, I'm selling too!",
                ChoiceKind::Normal,
                |s| StatPatch::new().with_money(s.money + 50_000).with_risk(s.risk + 15).with_sanity(s.sanity - 5),
                "You join the hustle. The real and the fake you stream side by side and the audience loves it.",
            )
            .sets_flag("sold_merch"),
        )
        .with_choice(Choice::new(
            "Existential crisis",
            ChoiceKind::Safe,
            |s| StatPatch::new().with_sanity(s.sanity - 10).with_risk(s.risk - 5),
            "If only the AI could serve the prison sentence for you.",
        ))
        .with_choice(
            Choice::new(
                "[Matrix] Hijack the stream's wallet",
                ChoiceKind::Talent,
                |s| StatPatch::new().with_money(s.money + 200_000).with_risk(s.risk + 5),
                "Thirty seconds of scripting later, the fake you is working for the real you.",
            )
            .with_talent_req("T06"),
        ),
        Event::new(
            "G04_MERCH_AUDIT",
            "Consumer Protection",
            "The shampoo was, unsurprisingly, not shampoo. A regulator has traced the merch payments back to an account in your name.",
        )
        .with_tags([EventTag::Digital, EventTag::Money])
        .with_condition(|s| s.has_flag("sold_merch"))
        .with_priority(50)
        .with_choice(
            Choice::new(
                "Refund everyone",
                ChoiceKind::Safe,
                |s| StatPatch::new().with_money(s.money - 80_000).with_karma(s.karma + 10),
                "You refund more than you ever made. Somewhere, a customer feels a tiny bit of justice.",
            )
            .with_money_req(80_000),
        )
        .with_choice(Choice::new(
            "Blame the AI",
            ChoiceKind::Aggressive,
            |s| StatPatch::new().with_risk(s.risk + 15).with_karma(s.karma - 10),
            "\"It wasn't me, it was the algorithm.\" Nobody believes you, but it trends.",
        )),
        Event::new(
            "G03_KFC",
            "Crazy Thursday",
            "It's Thursday. A flyer on a trash can says \"Send me 50 and I'll help you restore your nation.\" You used to own this franchise in your country.",
        )
        .with_tags([EventTag::Food, EventTag::City])
        .with_choice(Choice::new(
            "Hungry, but broke",
            ChoiceKind::Normal,
            |s| StatPatch::new().with_sanity(s.sanity - 5).with_health(s.health - 5),
            "You can't even afford an egg tart. Hunger makes your fall in class painfully clear.",
        ))
        .with_choice(
            Choice::new(
                "[Iron Stomach] Dig through the trash",
                ChoiceKind::Talent,
                |s| StatPatch::new().with_health(s.health + 10).with_sanity(s.sanity + 5),
                "Half a family bucket. Cold, but the best meal you've had in three days.",
            )
            .with_talent_req("T01"),
        ),
        Event::new(
            "G05_STARLINK",
            "Satellite Pass",
            "A string of satellites glides across the night sky like a ghost train. You know they scan the ground for heat signatures.",
        )
        .with_tags([EventTag::Sky, EventTag::Danger])
        .with_choice(Choice::new(
            "Douse the campfire",
            ChoiceKind::Stealth,
            |s| StatPatch::new().with_health(s.health - 5).with_risk(s.risk - 10),
            "The cold bites, but at least you vanish from the thermal cameras.",
        ))
        .with_choice(Choice::new(
            "Flip them off",
            ChoiceKind::Aggressive,
            |s| StatPatch::new().with_sanity(s.sanity + 5).with_risk(s.risk + 5),
            "The satellites can't see it, but you feel much better.",
        )),
    ]
}

fn barrio() -> Vec<Event> {
    vec![
        Event::new(
            "A02_CAR_MOD",
            "Illegal Mods",
            "A slum mechanic wants to strip your armored Mercedes for scrap. To buy his protection you let him turn the roof gun into a grill.",
        )
        .with_tags([EventTag::Mech, EventTag::City])
        .on_route(Route::Barrio)
        .with_choice(Choice::new(
            "Agree to the mods",
            ChoiceKind::Normal,
            |s| StatPatch::new().with_money(s.money + 20_000).with_risk(s.risk - 10),
            "The car that once stood for power is now the hottest food truck in town.",
        ))
        .with_choice(Choice::new(
            "I am the president!",
            ChoiceKind::Aggressive,
            |s| StatPatch::new().with_health(s.health - 20).with_risk(s.risk + 20),
            "The mechanic hits you with a wrench. \"There's only scrap here, no presidents.\"",
        )),
        Event::new(
            "A03_YOUTUBER",
            "Tourist Hotspot",
            "A few fearless foreign streamers sneak into the slum to broadcast \"Hunting for the legendary Big Mustache\".",
        )
        .with_tags([EventTag::Digital, EventTag::Danger])
        .on_route(Route::Barrio)
        .with_choice(Choice::new(
            "Hide in the sewer",
            ChoiceKind::Stealth,
            |s| StatPatch::new().with_health(s.health - 5).with_sanity(s.sanity - 10).with_risk(s.risk - 10),
            "You stare down a rat. Outside a streamer shouts: \"Chat, send a yacht and I'll go in!\"",
        ))
        .with_choice(Choice::new(
            "Charge for selfies",
            ChoiceKind::Social,
            |s| StatPatch::new().with_money(s.money + 5_000).with_risk(s.risk + 30).with_fans(s.fans + 10_000),
            "Sunglasses on, $5000 pocketed. The stream blows up, and so does your location.",
        )),
        Event::new(
            "A04_GANG",
            "Gang Negotiation",
            "The local boss, Mad Dog, finds you. Put him on your future amnesty list and he'll handle tonight's patrols.",
        )
        .with_tags([EventTag::Human, EventTag::Danger])
        .on_route(Route::Barrio)
        .with_choice(Choice::new(
            "Deal",
            ChoiceKind::Aggressive,
            |s| StatPatch::new().with_fans(s.fans - 5_000).with_risk(s.risk - 20).with_karma(s.karma - 20),
            "You sell out justice (not that you had much) for a quiet night.",
        ))
        .with_choice(Choice::new(
            "Refuse",
            ChoiceKind::Normal,
            |s| StatPatch::new().with_health(s.health - 20).with_sanity(s.sanity + 10),
            "You take a beating but keep your principles. Principles don't fill a stomach.",
        )),
    ]
}

fn jungle() -> Vec<Event> {
    vec![
        Event::new(
            "B01_COYOTE",
            "Coyote's Surcharge",
            "The smuggler flicks his cigarette into the dirt. \"You're a VIP client now. Your head is worth more than cocaine. Pay up.\"",
        )
        .with_tags([EventTag::Human, EventTag::Money])
        .on_route(Route::Jungle)
        .with_choice(
            Choice::new(
                "Pay the surcharge ($500k)",
                ChoiceKind::Normal,
                |s| StatPatch::new().with_money(s.money - 500_000).with_time(s.time - 1.0),
                "You pay the fortune. Inflation comes for everyone.",
            )
            .with_money_req(500_000),
        )
        .with_choice(
            Choice::new(
                "[Special Forces] Negotiate physically",
                ChoiceKind::Talent,
                |s| StatPatch::new().with_money(s.money + 10_000).with_risk(s.risk - 5),
                "You take his gun, skip the fee, and rob him of his cash for good measure.",
            )
            .with_talent_req("T10"),
        )
        .with_choice(Choice::new(
            "Walk off into the jungle alone",
            ChoiceKind::Stealth,
            |s| StatPatch::new().with_time(s.time - 3.0).with_health(s.health - 15).with_risk(s.risk + 5),
            "Without a guide you lose the trail twice. By nightfall your feet are bleeding.",
        )),
        Event::new(
            "B02_MUD",
            "Darien Mud",
            "You sink waist-deep into a swamp. Once ten bodyguards would have lain down as your bridge. Now you grab a branch that looks a lot like a snake.",
        )
        .with_tags([EventTag::Survival, EventTag::Nature])
        .on_route(Route::Jungle)
        .with_choice(Choice::new(
            "Crawl out",
            ChoiceKind::Normal,
            |s| StatPatch::new().with_health(s.health - 15).with_time(s.time - 2.0),
            "You crawl out like a mud monkey. One Italian bespoke shoe stays behind forever.",
        ))
        .with_choice(
            Choice::new(
                "Call the other migrants",
                ChoiceKind::Social,
                |s| StatPatch::new().with_money(s.money - 5_000).with_fans(s.fans - 100),
                "You pay people to haul you out. The way they look at you is pure contempt.",
            )
            .with_money_req(5_000),
        ),
        Event::new(
            "B04_FOOD",
            "Jungle Cuisine",
            "The rations are gone. You catch a brightly colored frog. According to survival TV, it's edible with the head off.",
        )
        .with_tags([EventTag::Food, EventTag::Nature])
        .on_route(Route::Jungle)
        .with_choice(Choice::new(
            "Eat it raw",
            ChoiceKind::Normal,
            |s| StatPatch::new().with_health(s.health - 20).with_sanity(s.sanity - 10),
            "It goes down, then comes back up. The world turns purple and you see your late grandmother.",
        ))
        .with_choice(
            Choice::new(
                "[Iron Stomach] Crunchy",
                ChoiceKind::Talent,
                |s| StatPatch::new().with_health(s.health + 10).with_sanity(s.sanity + 5),
                "Tastes like chicken. Five times the protein of beef.",
            )
            .with_talent_req("T01"),
        ),
    ]
}

fn bunker() -> Vec<Event> {
    vec![
        Event::new(
            "C02_PIZZA",
            "The Last Pizza",
            "You try ordering delivery to the secret base. The courier accepts, and also sells the coordinates to the CIA.",
        )
        .with_tags([EventTag::Food, EventTag::Danger])
        .on_route(Route::Bunker)
        .with_choice(Choice::new(
            "Go out for the pizza",
            ChoiceKind::Aggressive,
            |s| StatPatch::new().with_risk(s.risk + 30).with_health(s.health + 10),
            "You get the pizza. Five minutes later a cruise missile is delivered too. The base is damaged.",
        ))
        .with_choice(Choice::new(
            "Cancel the order",
            ChoiceKind::Safe,
            |s| StatPatch::new().with_sanity(s.sanity - 10).with_health(s.health - 5),
            "You listen to your stomach growl. The safest hunger there is.",
        )),
        Event::new(
            "C04_LOYALTY",
            "The General's Raise",
            "The guard captain salutes: morale is low, the men want dollars, and they want them now.",
        )
        .with_tags([EventTag::Money, EventTag::Human])
        .on_route(Route::Bunker)
        .with_choice(
            Choice::new(
                "Pay ($500k)",
                ChoiceKind::Normal,
                |s| StatPatch::new().with_money(s.money - 500_000).with_risk(s.risk - 10),
                "Money makes the world go round. His salute is much crisper now.",
            )
            .with_money_req(500_000),
        )
        .with_choice(Choice::new(
            "Talk about ideals",
            ChoiceKind::Aggressive,
            |s| StatPatch::new().with_risk(s.risk + 20).with_health(s.health - 20),
            "\"Ideals don't buy dinner.\" He fires a shot into the ceiling and you wet yourself.",
        )),
    ]
}

fn low_sanity() -> Vec<Event> {
    vec![Event::new(
        "S02_MIRROR",
        "Stranger in the Mirror",
        "The man in the mirror has no mustache. He wears an orange jumpsuit and is eating a sandwich in a New York prison.",
    )
    .with_tags([EventTag::Dark])
    .with_condition(|s| s.sanity < 30)
    .with_priority(80)
    .repeatable()
    .with_choice(Choice::new(
        "Smash the mirror",
        ChoiceKind::Aggressive,
        |s| StatPatch::new().with_health(s.health - 5).with_sanity(s.sanity + 5),
        "Your hand is cut, but the prisoner is gone.",
    ))
    .with_choice(Choice::new(
        "Ask him if it tastes good",
        ChoiceKind::Normal,
        |s| StatPatch::new().with_sanity(s.sanity - 10),
        "He smiles and offers you half. You reach for it and hit glass.",
    ))]
}

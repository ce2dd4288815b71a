//! Ending table. Order matters: the first matching ending wins, so failures
//! are declared before victories and route victories before the generic one.

use crate::catalog::Ending;
use crate::stats::Route;

/// Ending forced when the event pool runs dry.
pub const FALLBACK_ENDING: &str = "E_SURVIVE";

pub fn endings() -> Vec<Ending> {
    vec![
        // Failures
        Ending::new(
            "E_DEAD",
            "Dust of History",
            "You collapse in the mud. No funeral, no flag, just a one-line wire report. Two minutes later it is pushed off the feed by a video of a dancing cat.",
            |s| s.health <= 0,
        ),
        Ending::new(
            "E_EXTRADITION",
            "Extradition Flight",
            "A hood goes over your head and you smell jet fuel. \"Welcome aboard, this flight goes directly to the Southern District court of New York.\"",
            |s| s.risk >= 100,
        ),
        Ending::new(
            "E_INSANE",
            "Asylum Address",
            "Sanity hits zero. You deliver a speech to the empty air on a street corner. The police don't even cuff you; they wrap you in a blanket and take you where you belong.",
            |s| s.sanity <= 0,
        ),
        Ending::new(
            "E_BROKE",
            "Street Vendor",
            "The money is gone. The former dictator now sells arepas on a Colombian street corner, and somehow it is easier than being president.",
            |s| s.money < 0,
        ),
        // Victories
        Ending::new(
            "E_SUNRISE",
            "Island Sunrise",
            "The boat reaches an island that is on no map. You toss your last gold bar to the boatman. You are no longer a president; you are the owner of an island.",
            |s| s.out_of_time() && s.route == Route::Jungle,
        ),
        Ending::new(
            "E_URBAN_LEGEND",
            "Urban Legend",
            "Nobody has seen him. Some say he runs the slums now, some say he had surgery and debuted as a pop idol. The police never found a single whisker.",
            |s| s.out_of_time() && s.route == Route::Barrio,
        ),
        Ending::new(
            "E_BUNKER_KING",
            "King Below",
            "Seventy-two hours pass and the door holds. You sit on a throne of canned food; your only subjects are rats, but you are still king.",
            |s| s.out_of_time() && s.route == Route::Bunker,
        ),
        Ending::new(
            FALLBACK_ENDING,
            "Narrow Escape",
            "You lost your shoes and your savings, but you made it through the last 72 hours. Free air tastes sweet.",
            |s| s.out_of_time(),
        ),
    ]
}

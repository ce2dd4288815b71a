//! Ending Evaluator.

use exile_rules::{Ending, StatRecord};

/// Return the first ending, in declaration order, whose condition holds.
///
/// Conditions are pure, so evaluating the same state twice yields the same ending.
pub fn evaluate<'a>(state: &StatRecord, endings: &'a [Ending]) -> Option<&'a Ending> {
    endings.iter().find(|ending| ending.matches(state))
}

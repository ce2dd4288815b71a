//! The timed pause between a result and the next event.

use std::time::Duration;

/// A pending reveal of the next event.
///
/// Counts down cooperatively: nothing runs until the owner reports elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    remaining: Duration,
}

impl Transition {
    pub fn new(delay: Duration) -> Self {
        Self { remaining: delay }
    }

    /// Time left before the next event may be selected.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Count down by `elapsed`. Returns whether the pause is over.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_zero()
    }
}

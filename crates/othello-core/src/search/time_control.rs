//! Wall-clock budget for iterative deepening.

use std::time::{Duration, Instant};

/// A deadline fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    /// Starts the clock now with the given allowance.
    pub fn start(limit: Duration) -> TimeBudget {
        TimeBudget {
            start: Instant::now(),
            limit,
        }
    }

    pub fn from_millis(ms: u64) -> TimeBudget {
        TimeBudget::start(Duration::from_millis(ms))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left before the deadline, saturating at zero.
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed())
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed() >= self.limit
    }

    /// Whether a new iteration may start, given how long the previous one took.
    ///
    /// The next iteration is at least as expensive as the last, so it is not
    /// started unless the remaining time exceeds the last iteration's cost.
    pub fn can_start_iteration(&self, last_iteration: Duration) -> bool {
        let remaining = self.remaining();
        !remaining.is_zero() && last_iteration < remaining
    }
}

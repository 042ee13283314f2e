use std::time::{Duration, Instant};

/// Smallest interval the timer will arm with, in seconds.
pub const MIN_INTERVAL_SECS: u64 = 5;
/// Largest interval the interval selector offers, in seconds.
pub const MAX_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Self-rearming deadline driving periodic autosave.
///
/// Either idle or armed with exactly one pending deadline. The event loop
/// bounds its input poll by `remaining()` and runs the tick once the
/// deadline passes; re-arming measures from the end of the tick, not from a
/// fixed wall-clock grid, so intervals drift by however long the tick body
/// took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutosaveTimer {
    Idle,
    Armed { deadline: Instant },
}

impl AutosaveTimer {
    /// An armed timer whose first tick is one interval from now.
    pub fn armed(interval_secs: u64) -> Self {
        let mut timer = AutosaveTimer::Idle;
        timer.rearm(interval_secs);
        timer
    }

    /// Schedules the next tick `max(MIN_INTERVAL_SECS, interval_secs)`
    /// seconds from now. The interval is read anew on every re-arm, so a
    /// changed setting takes effect at the next tick rather than
    /// immediately.
    pub fn rearm(&mut self, interval_secs: u64) {
        let secs = interval_secs.max(MIN_INTERVAL_SECS);
        *self = AutosaveTimer::Armed {
            deadline: Instant::now() + Duration::from_secs(secs),
        };
    }

    pub fn is_due(&self) -> bool {
        match self {
            AutosaveTimer::Idle => false,
            AutosaveTimer::Armed { deadline } => Instant::now() >= *deadline,
        }
    }

    /// Time left until the pending deadline, or `None` when idle.
    pub fn remaining(&self) -> Option<Duration> {
        match self {
            AutosaveTimer::Idle => None,
            AutosaveTimer::Armed { deadline } => {
                Some(deadline.saturating_duration_since(Instant::now()))
            }
        }
    }
}

//! Per-round countdown timer.
//!
//! One timer per round with a fixed period. Each deadline re-arms relative to
//! the previous deadline rather than to when it was observed, so slow frames
//! delay ticks but never stretch the round.

use std::time::{Duration, Instant};

/// Periodic deadline that can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    period: Duration,
    deadline: Option<Instant>,
}

impl Countdown {
    /// Arm a timer whose first deadline is one period after `now`.
    #[must_use]
    pub fn start(now: Instant, period: Duration) -> Self {
        Self {
            period,
            deadline: Some(now + period),
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Next deadline, or `None` once cancelled.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the next deadline; zero if it already passed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Stop the timer for good.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Consume one elapsed deadline and re-arm for the next period.
    ///
    /// Returns false if the timer is cancelled or the deadline is still ahead.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(deadline + self.period);
                true
            }
            _ => false,
        }
    }
}

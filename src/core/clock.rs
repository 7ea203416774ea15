//! Virtual match clocks.
//!
//! Both clocks advance only when `tick` is called, once per wall-clock
//! second. The match state machine owns them and ticks them itself; a
//! real-time source (see `driver::ClockDriver`) or a test just calls
//! `Session::tick`.

use serde::{Deserialize, Serialize};

use super::config::TurnTime;

/// Whole-match stopwatch, counting up from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedClock {
    seconds: u32,
    running: bool,
}

impl ElapsedClock {
    /// Reset to zero and start counting.
    pub fn start(&mut self) {
        self.seconds = 0;
        self.running = true;
    }

    /// Advance one second if running.
    pub fn tick(&mut self) {
        if self.running {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    /// Stop counting. The reading is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Per-turn countdown.
///
/// With `TurnTime::Unlimited` it never counts down and never expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    limit: TurnTime,
    remaining: u32,
    running: bool,
}

impl TurnClock {
    /// A stopped clock for the given turn time.
    #[must_use]
    pub fn new(limit: TurnTime) -> Self {
        Self {
            limit,
            remaining: limit.limit().unwrap_or(0),
            running: false,
        }
    }

    /// Reset to the full turn and start counting.
    pub fn start(&mut self) {
        self.reset();
        self.running = true;
    }

    /// Refill the countdown without changing whether it runs.
    pub fn reset(&mut self) {
        self.remaining = self.limit.limit().unwrap_or(0);
    }

    /// Advance one second if running, floored at zero.
    pub fn tick(&mut self) {
        if self.running && !self.limit.is_unlimited() {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Seconds left this turn; `None` when turns are unlimited.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.limit.limit().map(|_| self.remaining)
    }

    /// The countdown has reached zero.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        !self.limit.is_unlimited() && self.remaining == 0
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn limit(&self) -> TurnTime {
        self.limit
    }
}

/// Render seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours.
///
/// ```
/// assert_eq!(linhas::core::format_clock(0), "00:00");
/// assert_eq!(linhas::core::format_clock(75), "01:15");
/// assert_eq!(linhas::core::format_clock(6000), "100:00");
/// ```
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

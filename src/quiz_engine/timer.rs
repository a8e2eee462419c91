//! Countdown owned by a timed session.
//!
//! The engine never sleeps. The host calls [`Countdown::tick`] once per
//! elapsed second (or with the number of seconds that passed) and the session
//! reacts to [`Tick::Expired`] by revealing results. Once cancelled or
//! expired, further ticks are ignored until the countdown is re-armed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The countdown is not running; nothing happened.
    Idle,
    Running { remaining: u32 },
    /// Reached zero on this tick. Reported exactly once.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// A running countdown starting at `limit` seconds.
    pub fn new(limit: u32) -> Self {
        Countdown { limit, remaining: limit, running: limit > 0 }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop further decrements. `remaining` is kept for display.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    /// Restart from the full limit.
    pub fn rearm(&mut self) {
        self.remaining = self.limit;
        self.running = self.limit > 0;
    }

    pub fn tick(&mut self, elapsed_secs: u32) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(elapsed_secs);
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running { remaining: self.remaining }
        }
    }
}

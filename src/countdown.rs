//! Deferred on/off countdown
//!
//! Driven by a periodic tick at a fixed rate. Every full second the
//! remaining `mm:ss` is reported; at `00:00` the pending action fires once
//! and the countdown disarms itself.

use core::fmt;

/// Default rate of the periodic tick
pub const DEFAULT_TICK_RATE_HZ: u32 = 100;

/// Remaining countdown time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub minutes: u8,
    pub seconds: u8,
}

impl Remaining {
    pub const fn is_zero(self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Reported by [`CountdownTimer::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// A second elapsed, time is still left
    Second(Remaining),
    /// Time is up: switch every channel on or off
    Fired { turn_on: bool },
}

#[derive(Debug, Clone)]
pub struct CountdownTimer {
    ticks_per_second: u32,
    remaining: Remaining,
    tick_accumulator: u32,
    active: bool,
    pending_turn_on: bool,
}

impl CountdownTimer {
    pub const fn new(ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second,
            remaining: Remaining {
                minutes: 0,
                seconds: 0,
            },
            tick_accumulator: 0,
            active: false,
            pending_turn_on: false,
        }
    }

    /// Start counting down from `minutes:00`
    ///
    /// Re-arming replaces a running countdown.
    pub fn arm(&mut self, minutes: u8, turn_on: bool) {
        self.remaining = Remaining {
            minutes,
            seconds: 0,
        };
        self.tick_accumulator = 0;
        self.pending_turn_on = turn_on;
        self.active = true;
    }

    /// Cancel without firing. Returns whether a countdown was running.
    pub fn reset(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        self.tick_accumulator = 0;
        was_active
    }

    /// Account for one tick
    pub fn advance(&mut self) -> Option<CountdownEvent> {
        if !self.active {
            return None;
        }

        let mut event = None;
        if !self.remaining.is_zero() {
            self.tick_accumulator += 1;
            if self.tick_accumulator >= self.ticks_per_second {
                self.tick_accumulator = 0;
                self.count_down_one_second();
                event = Some(CountdownEvent::Second(self.remaining));
            }
        }

        if self.remaining.is_zero() {
            self.active = false;
            return Some(CountdownEvent::Fired {
                turn_on: self.pending_turn_on,
            });
        }
        event
    }

    fn count_down_one_second(&mut self) {
        let remaining = &mut self.remaining;
        if remaining.seconds > 0 {
            remaining.seconds -= 1;
        } else if remaining.minutes > 0 {
            remaining.minutes -= 1;
            remaining.seconds = 59;
        }
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn remaining(&self) -> Remaining {
        self.remaining
    }

    pub const fn pending_turn_on(&self) -> bool {
        self.pending_turn_on
    }

    pub const fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE_HZ)
    }
}

//! Poll loop pacing.
//!
//! Keeps the controller on a fixed cadence without async/await or
//! platform-specific timers. The caller is responsible for sleeping between
//! polls and for stopping once the controller reports termination.

use embassy_time::{Duration, Instant};

use crate::Board;
use crate::controller::{Controller, PollOutcome};

/// Default poll period.
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_millis(100);

/// Result of a scheduled poll.
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// The deadline for the next poll.
    pub next_deadline: Instant,
    /// How long to wait until the next poll (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether the controller wants to keep running.
    pub outcome: PollOutcome,
}

/// Portable poll scheduler.
///
/// ```ignore
/// let mut scheduler = PollScheduler::new(controller);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     if result.outcome.is_terminated() {
///         break;
///     }
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct PollScheduler<'a, B: Board> {
    controller: Controller<'a, B>,
    next_poll: Instant,
    poll_period: Duration,
}

impl<'a, B: Board> PollScheduler<'a, B> {
    /// Uses [`DEFAULT_POLL_PERIOD`].
    pub fn new(controller: Controller<'a, B>) -> Self {
        Self::with_poll_period(controller, DEFAULT_POLL_PERIOD)
    }

    pub fn with_poll_period(controller: Controller<'a, B>, poll_period: Duration) -> Self {
        Self {
            controller,
            next_poll: Instant::from_millis(0),
            poll_period,
        }
    }

    /// Run one poll and return timing information.
    ///
    /// If the caller fell more than two periods behind, the schedule restarts
    /// from `now` instead of polling in a burst to catch up.
    pub fn tick(&mut self, now: Instant) -> PollResult {
        let max_drift = self.poll_period.as_millis() * 2;
        if now.as_millis() > self.next_poll.as_millis() + max_drift {
            self.next_poll = now;
        }

        let outcome = self.controller.poll();

        self.next_poll += self.poll_period;

        let sleep_duration = if self.next_poll > now {
            self.next_poll.duration_since(now)
        } else {
            Duration::from_millis(0)
        };

        PollResult {
            next_deadline: self.next_poll,
            sleep_duration,
            outcome,
        }
    }

    pub fn poll_period(&self) -> Duration {
        self.poll_period
    }

    pub fn controller(&self) -> &Controller<'a, B> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<'a, B> {
        &mut self.controller
    }

    /// Give the controller back, e.g. to release the board.
    pub fn into_controller(self) -> Controller<'a, B> {
        self.controller
    }
}

//! Automatic on/off from ambient light
//!
//! Two thresholds form a hysteresis band. Bright surroundings switch the
//! lamp off, dark ones switch it fully on, and anything in between runs it
//! at half intensity regardless of the previous state.

use crate::brightness::BrightnessMapper;
use crate::led::LedState;

/// Averaged sample at or above which the room counts as bright
pub const THRESHOLD_HIGH: u16 = 3000;

/// Averaged sample at or below which the room counts as dark
pub const THRESHOLD_LOW: u16 = 1000;

/// Hysteresis thresholds on the raw 12-bit sensor scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub low: u16,
    pub high: u16,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low: THRESHOLD_LOW,
            high: THRESHOLD_HIGH,
        }
    }
}

/// Outcome of one automatic evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDecision {
    /// Every channel to zero
    TurnOff,
    /// Every channel to full duty
    TurnOn,
    /// Every channel to the corrected half duty
    HalfOn,
    /// Leave the channels as they are
    Keep,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AutoLightController {
    thresholds: Thresholds,
}

impl AutoLightController {
    pub const fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub const fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Decide from the current on state and the averaged sample
    pub const fn decide(&self, is_on: bool, average: u16) -> AutoDecision {
        let Thresholds { low, high } = self.thresholds;
        if average > low && average < high {
            return AutoDecision::HalfOn;
        }
        match (is_on, average >= high) {
            (true, true) => AutoDecision::TurnOff,
            (false, false) => AutoDecision::TurnOn,
            _ => AutoDecision::Keep,
        }
    }

    /// Evaluate and apply the decision to `leds`
    ///
    /// Returns the decision together with whether the duties changed.
    pub fn apply(
        &self,
        leds: &mut LedState,
        average: u16,
        mapper: &BrightnessMapper,
    ) -> (AutoDecision, bool) {
        let decision = self.decide(leds.is_on(), average);
        let next = match decision {
            AutoDecision::TurnOff => LedState::OFF,
            AutoDecision::TurnOn => LedState::uniform(mapper.period()),
            AutoDecision::HalfOn => LedState::uniform(mapper.half_duty()),
            AutoDecision::Keep => *leds,
        };
        let changed = next != *leds;
        *leds = next;

        (decision, changed)
    }
}

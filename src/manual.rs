//! Actions behind the panel buttons
//!
//! The color button steps through the palette at full duty, the brightness
//! button steps through four levels relative to the current duties.

use crate::brightness::BrightnessMapper;
use crate::color::{PALETTE, Rgb};
use crate::led::LedState;

/// Levels of the brightness button, in click order after `Off`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessLevel {
    #[default]
    Off,
    Dim,
    Medium,
    Bright,
}

impl BrightnessLevel {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::Dim,
            Self::Dim => Self::Medium,
            Self::Medium => Self::Bright,
            Self::Bright => Self::Off,
        }
    }

    /// Step passed to [`BrightnessMapper::scale_by_ratio`], `None` for off
    pub const fn ratio(self) -> Option<u32> {
        match self {
            Self::Off => None,
            Self::Dim => Some(1),
            Self::Medium => Some(2),
            Self::Bright => Some(3),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Dim => "dim",
            Self::Medium => "medium",
            Self::Bright => "bright",
        }
    }
}

/// Click counters of both buttons
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualPanel {
    /// Palette index selected by the next color click
    next_color: usize,
    brightness: BrightnessLevel,
}

impl ManualPanel {
    pub const fn new() -> Self {
        Self {
            next_color: 0,
            brightness: BrightnessLevel::Off,
        }
    }

    pub const fn brightness(&self) -> BrightnessLevel {
        self.brightness
    }

    /// Select the next palette color at full duty
    ///
    /// Also rewinds the brightness button so its next click is `Dim`.
    pub fn click_color(&mut self, leds: &mut LedState, period: u32) -> Rgb {
        let color = PALETTE[self.next_color];
        self.next_color = (self.next_color + 1) % PALETTE.len();
        self.brightness = BrightnessLevel::Off;

        *leds = LedState::from_color(color, period);
        color
    }

    /// Advance the brightness level and rescale the current duties
    pub fn click_brightness(
        &mut self,
        leds: &mut LedState,
        mapper: &BrightnessMapper,
    ) -> BrightnessLevel {
        self.brightness = self.brightness.next();
        *leds = match self.brightness.ratio() {
            Some(n) => leds.map(|duty| mapper.scale_by_ratio(duty, n)),
            None => LedState::OFF,
        };
        self.brightness
    }
}

//! LED channel state
//!
//! Holds the three PWM duty values and the control mode.
//! Whether the lamp is "on" is always derived from the duties.

use crate::color::Rgb;

/// PWM period in timer counts. Duty values live in `[0, PWM_PERIOD]`.
pub const PWM_PERIOD: u32 = 1000;

/// One of the three PWM-driven LED channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedChannel {
    Red,
    Green,
    Blue,
}

impl LedChannel {
    /// All channels in output order
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Channel selected by its command letter (`R`, `G` or `B`)
    pub const fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'R' => Some(Self::Red),
            b'G' => Some(Self::Green),
            b'B' => Some(Self::Blue),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

/// Control mode of the lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Ambient light sensor decides
    #[default]
    Auto,
    /// Buttons and commands decide, the sensor is ignored
    Manual,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }
}

/// Duty values of the three channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedState {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl LedState {
    /// All channels dark
    pub const OFF: Self = Self::uniform(0);

    /// Same duty on every channel
    pub const fn uniform(duty: u32) -> Self {
        Self {
            red: duty,
            green: duty,
            blue: duty,
        }
    }

    /// Scale an 8-bit color onto the duty range
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_color(color: Rgb, period: u32) -> Self {
        let scale = |value: u8| (u64::from(value) * u64::from(period) / 255) as u32;
        Self {
            red: scale(color.r),
            green: scale(color.g),
            blue: scale(color.b),
        }
    }

    pub const fn get(&self, channel: LedChannel) -> u32 {
        match channel {
            LedChannel::Red => self.red,
            LedChannel::Green => self.green,
            LedChannel::Blue => self.blue,
        }
    }

    pub fn set(&mut self, channel: LedChannel, duty: u32) {
        match channel {
            LedChannel::Red => self.red = duty,
            LedChannel::Green => self.green = duty,
            LedChannel::Blue => self.blue = duty,
        }
    }

    /// Apply `f` to every channel duty
    #[must_use]
    pub fn map(self, f: impl Fn(u32) -> u32) -> Self {
        Self {
            red: f(self.red),
            green: f(self.green),
            blue: f(self.blue),
        }
    }

    /// The lamp counts as on while any channel is driven
    pub const fn is_on(&self) -> bool {
        self.red > 0 || self.green > 0 || self.blue > 0
    }
}

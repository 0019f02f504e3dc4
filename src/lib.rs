#![no_std]

pub mod auto_light;
pub mod averager;
pub mod brightness;
pub mod button;
pub mod color;
pub mod command;
pub mod controller;
pub mod countdown;
pub mod display;
pub mod frame;
pub mod led;
pub mod mailbox;
pub mod manual;
pub mod poll_scheduler;

pub use auto_light::{AutoDecision, AutoLightController, Thresholds};
pub use averager::SampledAverager;
pub use brightness::{BrightnessMapper, RatioCorrection};
pub use button::{Button, ButtonDebouncer, ButtonEdge, ButtonState, PinLevel};
pub use command::Command;
pub use controller::{Controller, ControllerConfig, PollOutcome};
pub use countdown::{CountdownEvent, CountdownTimer, Remaining};
pub use display::Notice;
pub use frame::{Frame, FrameAssembler};
pub use led::{LedChannel, LedState, Mode, PWM_PERIOD};
pub use mailbox::{Inbox, Mailbox, Occupied, TickCounter};
pub use manual::{BrightnessLevel, ManualPanel};
pub use poll_scheduler::{PollResult, PollScheduler};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract board trait
///
/// Implement this trait to run the controller on a concrete board.
/// Serial receive and the periodic tick are not part of it: their interrupt
/// handlers feed an [`Inbox`] instead.
pub trait Board {
    /// Convert one light sensor sample (0-4095), `None` if the read failed
    fn read_light_sample(&mut self) -> Option<u16>;

    /// Read the pin of a panel button
    fn read_button(&mut self, button: Button) -> PinLevel;

    /// Set the PWM duty of one channel
    fn set_duty(&mut self, channel: LedChannel, duty: u32);

    /// Transmit bytes on the serial console
    fn send(&mut self, bytes: &[u8]);
}

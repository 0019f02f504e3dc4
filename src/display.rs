//! Text sent over the serial console
//!
//! Informational lines end with CRLF. The countdown status is rewritten in
//! place on the current line once per second and ended before the next
//! informational line.

use core::fmt::{self, Write};

use heapless::String;

use crate::Board;
use crate::button::Button;
use crate::countdown::Remaining;
use crate::led::{LedChannel, LedState, Mode};
use crate::manual::BrightnessLevel;

/// Longest line the console renders
pub const LINE_CAPACITY: usize = 96;

/// Return, then erase to end of line
const REWRITE_LINE: &str = "\r\x1b[K";

/// Something worth telling the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ButtonPressed(Button),
    ColorSelected(LedChannel),
    BrightnessSelected(BrightnessLevel),
    ChannelBrightness { channel: LedChannel, duty: u32 },
    Duties(LedState),
    TimerArmed { minutes: u8, turn_on: bool },
    /// Countdown refused because the lamp already is in the target state
    TimerRedundant { turn_on: bool },
    TimerReset,
    TimerFired { turn_on: bool },
    ModeChanged(Mode),
    AllSwitched { on: bool },
    InvalidCommand,
    Usage,
    Terminating,
    /// In-place countdown status
    Countdown(Remaining),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ButtonPressed(button) => write!(f, "button {} pressed", button.number()),
            Self::ColorSelected(channel) => write!(f, "color button: {}", channel.as_str()),
            Self::BrightnessSelected(level) => write!(f, "brightness button: {}", level.as_str()),
            Self::ChannelBrightness { channel, duty } => {
                write!(f, "{} LED brightness: {}", channel.letter(), duty)
            }
            Self::Duties(leds) => write!(
                f,
                "duty R: {} G: {} B: {}",
                leds.red, leds.green, leds.blue
            ),
            Self::TimerArmed { minutes, turn_on } => {
                write!(f, "[timer] LED {} in {} min", on_off(turn_on), minutes)
            }
            Self::TimerRedundant { turn_on } => {
                write!(f, "LED is already {}", if turn_on { "on" } else { "off" })
            }
            Self::TimerReset => f.write_str("[timer] reset"),
            Self::TimerFired { turn_on } => write!(f, "[timer] LED {}", on_off(turn_on)),
            Self::ModeChanged(mode) => write!(f, "mode: {}", mode.as_str()),
            Self::AllSwitched { on } => write!(f, "all channels {}", if on { "on" } else { "off" }),
            Self::InvalidCommand => f.write_str("invalid command, expected HDR<command>TAIL"),
            Self::Usage => f.write_str(
                "commands: R<0-100> G<0-100> B<0-100> T<min>ON T<min>OFF S AON AOFF ON OFF EXIT",
            ),
            Self::Terminating => f.write_str("exit requested, controller stopped"),
            Self::Countdown(remaining) => write!(f, "{}", remaining),
        }
    }
}

const fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

/// Console line state
///
/// The countdown status line is left open so the next second can rewrite
/// it. Any other notice closes it first.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Console {
    status_open: bool,
}

impl Console {
    pub(crate) const fn new() -> Self {
        Self { status_open: false }
    }

    /// Render `notice` and send it to the board's console
    pub(crate) fn emit<B: Board>(&mut self, board: &mut B, notice: Notice) {
        let mut line: String<LINE_CAPACITY> = String::new();
        let rendered = match notice {
            Notice::Countdown(_) => {
                self.status_open = true;
                write!(line, "{}{}", REWRITE_LINE, notice)
            }
            _ if self.status_open => {
                self.status_open = false;
                write!(line, "\r\n{}\r\n", notice)
            }
            _ => write!(line, "{}\r\n", notice),
        };
        if rendered.is_err() {
            // Overlong line, send what fit
            #[cfg(feature = "esp32-log")]
            esp_println::println!("[Console.emit] line truncated: {:?}", notice);
        }
        board.send(line.as_bytes());
    }
}

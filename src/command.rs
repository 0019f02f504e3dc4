//! Serial command decoding
//!
//! Payload grammar (inside `HDR ... TAIL`):
//!
//! | Payload | Command |
//! |---|---|
//! | `R50`, `G10`, `B100` | channel brightness in percent |
//! | `T5ON`, `T10OFF` | switch on/off after up to 99 minutes |
//! | `S` | cancel the countdown |
//! | `AON`, `AOFF` | automatic mode on/off |
//! | `ON`, `OFF` | every channel on/off |
//! | `EXIT` | stop the controller |
//!
//! The whole payload must match; trailing characters make it invalid.

use crate::frame::payload;
use crate::led::LedChannel;

/// Maximum number of minute digits after `T`
const TIMER_MINUTE_DIGITS: usize = 2;

/// Decoded serial command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set one channel, percent is clamped when mapped to a duty
    SetChannelBrightness { channel: LedChannel, percent: u32 },
    /// Arm the countdown
    SetTimer { minutes: u8, turn_on: bool },
    /// Cancel the countdown without firing
    ResetTimer,
    /// Switch between automatic and manual mode
    SetMode { auto: bool },
    SetAllOn,
    SetAllOff,
    /// Stop the poll loop
    Terminate,
    /// Anything that did not decode
    Invalid,
}

impl Command {
    /// Decode a complete frame
    pub fn parse(frame: &[u8]) -> Self {
        payload(frame).map_or(Self::Invalid, Self::decode)
    }

    /// Decode a payload without its `HDR`/`TAIL` framing
    pub fn decode(payload: &[u8]) -> Self {
        let Some((&first, rest)) = payload.split_first() else {
            return Self::Invalid;
        };

        match first {
            b'R' | b'G' | b'B' => {
                let channel = LedChannel::from_letter(first);
                match (channel, parse_digits(rest)) {
                    (Some(channel), Some(percent)) => Self::SetChannelBrightness { channel, percent },
                    _ => Self::Invalid,
                }
            }
            b'T' => decode_timer(rest),
            b'S' if rest.is_empty() => Self::ResetTimer,
            b'A' => match rest {
                b"ON" => Self::SetMode { auto: true },
                b"OFF" => Self::SetMode { auto: false },
                _ => Self::Invalid,
            },
            b'O' => match rest {
                b"N" => Self::SetAllOn,
                b"FF" => Self::SetAllOff,
                _ => Self::Invalid,
            },
            b'E' if rest == b"XIT" => Self::Terminate,
            _ => Self::Invalid,
        }
    }

    /// Whether accepting this command takes the lamp out of automatic mode
    pub const fn forces_manual(&self) -> bool {
        matches!(
            self,
            Self::SetChannelBrightness { .. } | Self::SetTimer { .. } | Self::SetAllOn | Self::SetAllOff
        )
    }

    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// `<0-2 digits>(ON|OFF)`, missing digits mean zero minutes
fn decode_timer(rest: &[u8]) -> Command {
    let digits = rest
        .iter()
        .take(TIMER_MINUTE_DIGITS)
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    let (minutes, suffix) = rest.split_at(digits);
    let minutes = minutes
        .iter()
        .fold(0u8, |acc, digit| acc * 10 + (digit - b'0'));

    match suffix {
        b"ON" => Command::SetTimer {
            minutes,
            turn_on: true,
        },
        b"OFF" => Command::SetTimer {
            minutes,
            turn_on: false,
        },
        _ => Command::Invalid,
    }
}

/// Non-empty run of ASCII digits, saturating on overflow
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(bytes.iter().fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
    }))
}

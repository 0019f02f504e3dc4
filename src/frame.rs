//! Serial receive framing
//!
//! Bytes are accumulated until the end character arrives or the buffer is
//! full, whichever comes first. A well-formed frame reads
//! `HDR<payload>TAIL` followed by the end character.

use heapless::Vec;

/// Frame start marker
pub const FRAME_HEADER: &[u8] = b"HDR";

/// Frame end marker
pub const FRAME_TAIL: &[u8] = b"TAIL";

/// Byte that completes a frame early
pub const END_CHARACTER: u8 = b'\r';

/// Receive buffer size, longer input is cut into a frame here
pub const RX_BUFFER_SIZE: usize = 30;

/// Raw bytes of one received frame
pub type Frame = Vec<u8, RX_BUFFER_SIZE>;

/// Payload between `HDR` and the first `TAIL` after it
///
/// Returns `None` when the frame does not start with `HDR` or has no
/// `TAIL`. Anything after `TAIL` is ignored.
pub fn payload(frame: &[u8]) -> Option<&[u8]> {
    let body = frame.strip_prefix(FRAME_HEADER)?;
    let end = body
        .windows(FRAME_TAIL.len())
        .position(|window| window == FRAME_TAIL)?;

    Some(&body[..end])
}

/// Collects received bytes into frames
///
/// Lives on the producer side (the serial receive interrupt).
#[derive(Debug, Default)]
pub struct FrameAssembler {
    buffer: Frame,
}

impl FrameAssembler {
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Append a received byte
    ///
    /// Returns the completed frame once `byte` is the end character or the
    /// buffer has filled up. The assembler starts empty again afterwards.
    pub fn push(&mut self, byte: u8) -> Option<Frame> {
        // Cannot fail: a full buffer is always handed out below
        let _ = self.buffer.push(byte);

        if byte == END_CHARACTER || self.buffer.is_full() {
            return Some(core::mem::take(&mut self.buffer));
        }
        None
    }

    /// Drop partially received bytes
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of bytes waiting for completion
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

//! Event cells between interrupt producers and the poll loop
//!
//! Each hardware event source owns exactly one cell and the poll loop is the
//! only consumer. A [`Mailbox`] holds at most one payload: the producer posts
//! it, the consumer takes it and thereby clears the flag, and until then a
//! further post is refused. Access goes through `critical-section`, so the
//! cells can sit in a `static` shared with interrupt handlers.

use core::cell::{Cell, RefCell};

use critical_section::Mutex;

use crate::frame::Frame;

/// Error returned when posting while the previous payload is still unread.
///
/// Hands the rejected payload back to the producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupied<T>(pub T);

/// Single-slot flag plus payload cell
pub struct Mailbox<T> {
    slot: Mutex<RefCell<Option<T>>>,
}

impl<T> Mailbox<T> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(None)),
        }
    }

    /// Store a payload and raise the flag
    pub fn post(&self, value: T) -> Result<(), Occupied<T>> {
        critical_section::with(|cs| {
            let mut slot = self.slot.borrow(cs).borrow_mut();
            if slot.is_some() {
                return Err(Occupied(value));
            }
            *slot = Some(value);
            Ok(())
        })
    }

    /// Read the payload and clear the flag
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.slot.borrow(cs).borrow_mut().take())
    }

    /// Whether a payload is waiting
    pub fn is_full(&self) -> bool {
        critical_section::with(|cs| self.slot.borrow(cs).borrow().is_some())
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Count of periodic ticks not yet consumed by the poll loop
pub struct TickCounter {
    pending: Mutex<Cell<u32>>,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(0)),
        }
    }

    /// Record one tick, called from the periodic timer interrupt
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let pending = self.pending.borrow(cs);
            pending.set(pending.get().saturating_add(1));
        });
    }

    /// Ticks since the previous call
    pub fn take(&self) -> u32 {
        critical_section::with(|cs| self.pending.borrow(cs).replace(0))
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Cells shared between the event producers and the [`Controller`]
///
/// [`Controller`]: crate::Controller
#[derive(Default)]
pub struct Inbox {
    frames: Mailbox<Frame>,
    ticks: TickCounter,
}

impl Inbox {
    pub const fn new() -> Self {
        Self {
            frames: Mailbox::new(),
            ticks: TickCounter::new(),
        }
    }

    /// Receive side: hand over a completed frame
    pub fn post_frame(&self, frame: Frame) -> Result<(), Occupied<Frame>> {
        self.frames.post(frame)
    }

    /// Periodic timer side: count one tick
    pub fn tick(&self) {
        self.ticks.tick();
    }

    pub(crate) fn take_frame(&self) -> Option<Frame> {
        self.frames.take()
    }

    pub(crate) fn take_ticks(&self) -> u32 {
        self.ticks.take()
    }
}

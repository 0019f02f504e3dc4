//! Running average over the most recent light sensor samples
//!
//! Fixed-size ring buffer with a running sum, so `average` is O(1).
//! A zero sample marks a failed conversion and is never stored.

/// Number of samples the average spans
pub const SAMPLE_WINDOW: usize = 60;

/// Sample value reported for a failed sensor read
pub const INVALID_SAMPLE: u16 = 0;

/// Moving average of raw sensor samples
///
/// N is the number of samples kept
#[derive(Debug, Clone)]
pub struct SampledAverager<const N: usize = SAMPLE_WINDOW> {
    buffer: [u16; N],
    /// Index of the oldest sample
    head: usize,
    /// Index the next sample is written to
    tail: usize,
    count: usize,
    sum: u32,
}

impl<const N: usize> SampledAverager<N> {
    pub const fn new() -> Self {
        Self {
            buffer: [0; N],
            head: 0,
            tail: 0,
            count: 0,
            sum: 0,
        }
    }

    /// Add a sample, evicting the oldest one once the window is full
    pub fn push(&mut self, value: u16) {
        if value == INVALID_SAMPLE || N == 0 {
            return;
        }

        if self.count == N {
            self.sum -= u32::from(self.buffer[self.head]);
            self.head = (self.head + 1) % N;
        }

        self.buffer[self.tail] = value;
        self.sum += u32::from(value);
        self.tail = (self.tail + 1) % N;

        if self.count < N {
            self.count += 1;
        }
    }

    /// Floor of the mean of the stored samples, 0 while empty
    #[allow(clippy::cast_possible_truncation)]
    pub fn average(&self) -> u16 {
        if self.count == 0 {
            return 0;
        }
        // The mean of u16 values always fits in u16
        (self.sum / self.count as u32) as u16
    }

    /// Number of stored samples
    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Sum of the stored samples
    pub const fn sum(&self) -> u32 {
        self.sum
    }
}

impl<const N: usize> Default for SampledAverager<N> {
    fn default() -> Self {
        Self::new()
    }
}

//! Brightness to PWM duty mapping
//!
//! LEDs are perceived non-linearly, so every duty written from a linear
//! control value goes through gamma correction:
//! `corrected = (duty / period) ^ (1 / gamma) * period`.

/// Gamma of the LED response curve
pub const DEFAULT_GAMMA: f64 = 2.2;

/// Number of discrete brightness steps of the brightness button
pub const RATIO_STEPS: u32 = 3;

/// How `scale_by_ratio` treats a duty that was already corrected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatioCorrection {
    /// Correct the scaled duty again. Existing lamps behave this way.
    #[default]
    Double,
    /// Use the scaled duty as is
    Single,
}

/// Maps percentages and brightness steps to gamma corrected duties
#[derive(Debug, Clone, Copy)]
pub struct BrightnessMapper {
    period: u32,
    gamma: f64,
    ratio_correction: RatioCorrection,
}

impl BrightnessMapper {
    pub const fn new(period: u32, gamma: f64) -> Self {
        Self {
            period,
            gamma,
            ratio_correction: RatioCorrection::Double,
        }
    }

    #[must_use]
    pub const fn with_ratio_correction(mut self, ratio_correction: RatioCorrection) -> Self {
        self.ratio_correction = ratio_correction;
        self
    }

    pub const fn period(&self) -> u32 {
        self.period
    }

    pub const fn ratio_correction(&self) -> RatioCorrection {
        self.ratio_correction
    }

    /// Gamma correct a duty in `[0, period]`
    ///
    /// Monotonic, maps 0 to 0 and `period` to `period`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn gamma_correct(&self, duty: u32) -> u32 {
        if self.period == 0 {
            return 0;
        }
        let duty = duty.min(self.period);
        let normalized = f64::from(duty) / f64::from(self.period);
        let corrected = libm::pow(normalized, 1.0 / self.gamma);

        (corrected * f64::from(self.period)) as u32
    }

    /// Linear percent (clamped to 100) to a corrected duty
    #[allow(clippy::cast_possible_truncation)]
    pub fn percent_to_duty(&self, percent: u32) -> u32 {
        let percent = u64::from(percent.min(100));
        // At most `period`, so it fits back into u32
        let linear = (percent * u64::from(self.period) / 100) as u32;
        self.gamma_correct(linear)
    }

    /// Duty for brightness step `n` of [`RATIO_STEPS`], relative to `duty`
    ///
    /// With [`RatioCorrection::Double`] the scaled value is corrected again
    /// even though `duty` usually came out of [`Self::gamma_correct`].
    pub fn scale_by_ratio(&self, duty: u32, n: u32) -> u32 {
        let scaled = (duty / RATIO_STEPS).saturating_mul(n);
        match self.ratio_correction {
            RatioCorrection::Double => self.gamma_correct(scaled),
            RatioCorrection::Single => scaled.min(self.period),
        }
    }

    /// Corrected duty for half intensity
    pub fn half_duty(&self) -> u32 {
        self.gamma_correct(self.period / 2)
    }
}

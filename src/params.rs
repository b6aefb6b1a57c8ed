//! Laser, modulation, and absorption-line parameters.

use tracing::warn;

use crate::constants::{LASER_FREQ_RANGE, LINE_WIDTH_RANGE, MOD_FREQ_RANGE, MOD_INDEX_RANGE};
use crate::errors::{Result, SpectroscopyError};
use crate::math::Scalar;

/// A single sinusoidal modulation tone applied to the carrier phase.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulationTone {
    /// Modulation frequency (degrees per unit time).
    pub frequency: Scalar,
    /// Modulation index (peak phase excursion).
    pub index: Scalar,
}

impl ModulationTone {
    /// Creates a tone.
    #[must_use]
    pub const fn new(frequency: Scalar, index: Scalar) -> Self {
        Self { frequency, index }
    }

    /// True when the tone leaves the carrier unmodulated.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.index == 0.0
    }
}

/// The six scalars that fully describe one simulation run.
///
/// Values are plain data; [`SimulationParameters::validate`] enforces the only
/// hard requirement of the model (finite inputs, strictly positive line width).
/// The reference UI ranges in [`crate::constants`] are advisory.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Absorption line width γ (Gaussian standard deviation).
    pub line_width: Scalar,
    /// Frequency of the first modulation tone.
    pub mod_freq1: Scalar,
    /// Frequency of the second modulation tone.
    pub mod_freq2: Scalar,
    /// Carrier frequency; the line sits where `laser_freq + ω = 0`.
    pub laser_freq: Scalar,
    /// Index of the first modulation tone.
    pub mod_index1: Scalar,
    /// Index of the second modulation tone.
    pub mod_index2: Scalar,
}

impl Default for SimulationParameters {
    /// The lower end of every reference slider, which is where the tool starts.
    fn default() -> Self {
        Self {
            line_width: 0.01,
            mod_freq1: 0.01,
            mod_freq2: 0.01,
            laser_freq: LASER_FREQ_RANGE.min,
            mod_index1: 0.01,
            mod_index2: 0.01,
        }
    }
}

impl SimulationParameters {
    /// Creates a parameter set from all six values.
    #[must_use]
    pub const fn new(
        line_width: Scalar,
        mod_freq1: Scalar,
        mod_freq2: Scalar,
        laser_freq: Scalar,
        mod_index1: Scalar,
        mod_index2: Scalar,
    ) -> Self {
        Self { line_width, mod_freq1, mod_freq2, laser_freq, mod_index1, mod_index2 }
    }

    /// Sets the line width γ.
    #[must_use]
    pub fn with_line_width(mut self, line_width: Scalar) -> Self {
        self.line_width = line_width;
        self
    }

    /// Sets the carrier frequency.
    #[must_use]
    pub fn with_laser_freq(mut self, laser_freq: Scalar) -> Self {
        self.laser_freq = laser_freq;
        self
    }

    /// Replaces the first modulation tone.
    #[must_use]
    pub fn with_tone1(mut self, tone: ModulationTone) -> Self {
        self.mod_freq1 = tone.frequency;
        self.mod_index1 = tone.index;
        self
    }

    /// Replaces the second modulation tone.
    #[must_use]
    pub fn with_tone2(mut self, tone: ModulationTone) -> Self {
        self.mod_freq2 = tone.frequency;
        self.mod_index2 = tone.index;
        self
    }

    /// First modulation tone.
    #[must_use]
    pub const fn tone1(&self) -> ModulationTone {
        ModulationTone::new(self.mod_freq1, self.mod_index1)
    }

    /// Second modulation tone.
    #[must_use]
    pub const fn tone2(&self) -> ModulationTone {
        ModulationTone::new(self.mod_freq2, self.mod_index2)
    }

    /// Both tones in application order.
    #[must_use]
    pub const fn tones(&self) -> [ModulationTone; 2] {
        [self.tone1(), self.tone2()]
    }

    /// Beat frequency between the two tones, `mod_freq1 - mod_freq2`.
    #[must_use]
    pub fn beat_frequency(&self) -> Scalar {
        self.mod_freq1 - self.mod_freq2
    }

    /// Checks that every field is finite and the line width is strictly positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("line_width", self.line_width),
            ("mod_freq1", self.mod_freq1),
            ("mod_freq2", self.mod_freq2),
            ("laser_freq", self.laser_freq),
            ("mod_index1", self.mod_index1),
            ("mod_index2", self.mod_index2),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                warn!(parameter = name, value, "rejecting non-finite parameter");
                return Err(SpectroscopyError::not_finite(name, value));
            }
        }
        if self.line_width <= 0.0 {
            warn!(line_width = self.line_width, "rejecting non-positive line width");
            return Err(SpectroscopyError::invalid(
                "line_width",
                format!("must be > 0, got {}", self.line_width),
            ));
        }
        Ok(())
    }

    /// True when every field lies inside the reference UI ranges.
    #[must_use]
    pub fn within_reference_ranges(&self) -> bool {
        LINE_WIDTH_RANGE.contains(self.line_width)
            && MOD_FREQ_RANGE.contains(self.mod_freq1)
            && MOD_FREQ_RANGE.contains(self.mod_freq2)
            && LASER_FREQ_RANGE.contains(self.laser_freq)
            && MOD_INDEX_RANGE.contains(self.mod_index1)
            && MOD_INDEX_RANGE.contains(self.mod_index2)
    }
}

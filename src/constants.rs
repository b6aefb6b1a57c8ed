//! Reference constants for the modulation spectroscopy model.
//!
//! The grid extents and parameter ranges reproduce the defaults of the
//! interactive tool the model was built for: a 1000-point detuning sweep over
//! ±10 000 and a 1000-sample time window over [0, 1000].

use crate::math::Scalar;

/// Fractional depth of the Gaussian absorption dip on a unit baseline.
pub const ABSORPTION_DEPTH: Scalar = 0.5;

/// Lower bound of the reference detuning sweep.
pub const DETUNING_START: Scalar = -10_000.0;
/// Upper bound of the reference detuning sweep.
pub const DETUNING_STOP: Scalar = 10_000.0;
/// Number of points in the reference detuning sweep.
pub const DETUNING_POINTS: usize = 1000;

/// Start of the reference time window.
pub const TIME_START: Scalar = 0.0;
/// End of the reference time window.
pub const TIME_STOP: Scalar = 1000.0;
/// Number of samples in the reference time window.
pub const TIME_POINTS: usize = 1000;

/// Extent of the display axis the absorption and error traces are drawn against.
pub const DISPLAY_AXIS_STOP: Scalar = 10_000.0;

/// Closed or half-open interval describing the values a front end should offer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    /// Lower bound.
    pub min: Scalar,
    /// Upper bound (always inclusive).
    pub max: Scalar,
    /// Whether `min` itself is admissible.
    pub min_inclusive: bool,
}

impl ParameterRange {
    /// Interval `(min, max]`.
    #[must_use]
    pub const fn open_closed(min: Scalar, max: Scalar) -> Self {
        Self { min, max, min_inclusive: false }
    }

    /// Interval `[min, max]`.
    #[must_use]
    pub const fn closed(min: Scalar, max: Scalar) -> Self {
        Self { min, max, min_inclusive: true }
    }

    /// True if `value` lies inside the range.
    #[must_use]
    pub fn contains(&self, value: Scalar) -> bool {
        let above = if self.min_inclusive { value >= self.min } else { value > self.min };
        above && value <= self.max
    }

    /// Clamps `value` into `[min, max]`.
    ///
    /// For half-open ranges the lower bound is returned as-is; callers feeding a
    /// slider should offset it themselves.
    #[must_use]
    pub fn clamp(&self, value: Scalar) -> Scalar {
        value.clamp(self.min, self.max)
    }
}

/// Reference range for the absorption line width γ.
pub const LINE_WIDTH_RANGE: ParameterRange = ParameterRange::open_closed(0.0, 1000.0);
/// Reference range for either modulation frequency.
pub const MOD_FREQ_RANGE: ParameterRange = ParameterRange::open_closed(0.0, 100.0);
/// Reference range for the laser (carrier) frequency.
pub const LASER_FREQ_RANGE: ParameterRange = ParameterRange::closed(50.0, 100.0);
/// Reference range for either modulation index.
pub const MOD_INDEX_RANGE: ParameterRange = ParameterRange::closed(0.0, 10.0);

//! Detuning and time grids plus sweep helpers.

use std::ops::Deref;

use crate::constants::{
    DETUNING_POINTS, DETUNING_START, DETUNING_STOP, TIME_POINTS, TIME_START, TIME_STOP,
};
use crate::errors::{Result, SpectroscopyError};
use crate::math::Scalar;

/// Ordered output values aligned index-for-index with a grid.
pub type Curve = Vec<Scalar>;

/// Generates `n` linearly spaced samples in [start, stop]. The last sample is exactly `stop`.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            let last = n - 1;
            (0..n)
                .map(|i| if i == last { stop } else { start + step * i as Scalar })
                .collect()
        }
    }
}

/// Applies `f` to each grid value and collects results.
#[must_use]
pub fn sweep_map<I, F, T>(values: I, f: F) -> Vec<T>
where
    I: IntoIterator<Item = Scalar>,
    F: FnMut(Scalar) -> T,
{
    values.into_iter().map(f).collect()
}

/// Evenly spaced grid description, as carried in configuration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// First sample.
    pub start: Scalar,
    /// Last sample (inclusive).
    pub stop: Scalar,
    /// Number of samples.
    pub points: usize,
}

impl GridSpec {
    /// Creates a grid spec.
    #[must_use]
    pub const fn new(start: Scalar, stop: Scalar, points: usize) -> Self {
        Self { start, stop, points }
    }

    /// Reference detuning sweep: 1000 points over [-10 000, 10 000].
    #[must_use]
    pub const fn detuning_default() -> Self {
        Self::new(DETUNING_START, DETUNING_STOP, DETUNING_POINTS)
    }

    /// Reference time window: 1000 samples over [0, 1000].
    #[must_use]
    pub const fn time_default() -> Self {
        Self::new(TIME_START, TIME_STOP, TIME_POINTS)
    }

    /// Materialises the grid, requiring at least `min_points` samples.
    pub fn build(&self, name: &'static str, min_points: usize) -> Result<Grid> {
        if !self.start.is_finite() {
            return Err(SpectroscopyError::not_finite(name, self.start));
        }
        if !self.stop.is_finite() {
            return Err(SpectroscopyError::not_finite(name, self.stop));
        }
        if !(self.stop - self.start).is_finite() {
            return Err(SpectroscopyError::invalid(
                name,
                format!("span from {} to {} is not representable", self.start, self.stop),
            ));
        }
        if self.points < min_points {
            return Err(SpectroscopyError::invalid(
                name,
                format!("need at least {min_points} points, got {}", self.points),
            ));
        }
        Ok(Grid { values: linspace(self.start, self.stop, self.points) })
    }
}

/// Immutable ordered sequence of sample positions.
///
/// Grids are built once per run and borrowed by every model evaluated on them.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    values: Vec<Scalar>,
}

/// Frequency offsets ω at which the absorption line and error signals are evaluated.
pub type DetuningGrid = Grid;
/// Time samples at which the modulated field is synthesised.
pub type TimeGrid = Grid;

impl Grid {
    /// Wraps explicit sample positions. Rejects empty or non-finite input.
    pub fn from_values(values: Vec<Scalar>) -> Result<Self> {
        if values.is_empty() {
            return Err(SpectroscopyError::invalid("grid", "grid must contain at least one point"));
        }
        if let Some(bad) = values.iter().copied().find(|v| !v.is_finite()) {
            return Err(SpectroscopyError::not_finite("grid", bad));
        }
        Ok(Self { values })
    }

    /// Evenly spaced grid of `n` points over [start, stop].
    pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Result<Self> {
        GridSpec::new(start, stop, n).build("grid", 1)
    }

    /// Reference detuning grid.
    #[must_use]
    pub fn detuning_default() -> Self {
        Self { values: linspace(DETUNING_START, DETUNING_STOP, DETUNING_POINTS) }
    }

    /// Reference time grid.
    #[must_use]
    pub fn time_default() -> Self {
        Self { values: linspace(TIME_START, TIME_STOP, TIME_POINTS) }
    }

    /// Sample positions.
    #[must_use]
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    /// Evaluates `f` at each sample.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Curve
    where
        F: FnMut(Scalar) -> Scalar,
    {
        sweep_map(self.values.iter().copied(), f)
    }
}

impl Deref for Grid {
    type Target = [Scalar];

    fn deref(&self) -> &[Scalar] {
        &self.values
    }
}

//! Time-domain synthesis of the phase-modulated optical field.
//!
//! The carrier `cos(f_L t)` is multiplied by one factor `cos(m sin(f_m t))` per
//! modulation tone. A tone with index zero contributes a factor of exactly one,
//! so the same expression covers zero-, one-, and two-tone modulation. All
//! arguments `f · t` are read in degrees.

use crate::math::{degrees_to_radians, Scalar};
use crate::params::{ModulationTone, SimulationParameters};
use crate::sweep::{Curve, TimeGrid};

/// Factor contributed by a single modulation tone at time `t`.
#[inline]
#[must_use]
pub fn tone_factor(tone: ModulationTone, t: Scalar) -> Scalar {
    (tone.index * degrees_to_radians(tone.frequency * t).sin()).cos()
}

/// Unmodulated carrier at time `t`.
#[inline]
#[must_use]
pub fn carrier(laser_freq: Scalar, t: Scalar) -> Scalar {
    degrees_to_radians(laser_freq * t).cos()
}

/// Field amplitude `E(t)` for the cascaded two-tone modulation.
#[must_use]
pub fn field_sample(params: &SimulationParameters, t: Scalar) -> Scalar {
    params
        .tones()
        .into_iter()
        .filter(|tone| !tone.is_silent())
        .fold(carrier(params.laser_freq, t), |e, tone| e * tone_factor(tone, t))
}

/// Field amplitude at every sample of `times`.
#[must_use]
pub fn synthesize_field(params: &SimulationParameters, times: &TimeGrid) -> Curve {
    times.map(|t| field_sample(params, t))
}

/// Square-law detector output `|E(t)|²` for a real field trace.
#[must_use]
pub fn detected_intensity(field: &[Scalar]) -> Curve {
    field.iter().map(|e| e * e).collect()
}

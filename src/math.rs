//! Shared numerical primitives anchored on `num-complex`.

use std::f64::consts::PI;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for spectra and phasors.
pub type CScalar = num_complex::Complex<Scalar>;

/// Converts an angle expressed in degrees into radians.
///
/// Every oscillating argument in the field model (`f · t`) is read in degrees,
/// so the carrier and both modulation tones pass through this scaling.
#[inline]
#[must_use]
pub fn degrees_to_radians(degrees: Scalar) -> Scalar {
    degrees * PI / 180.0
}

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    CScalar::from_polar(1.0, theta)
}

/// Gaussian profile `exp(-x² / (2σ²))` with unit peak.
#[inline]
#[must_use]
pub fn gaussian(x: Scalar, sigma: Scalar) -> Scalar {
    // Scale first so neither x² nor σ² can overflow or underflow on its own.
    let r = x / sigma;
    (-0.5 * r * r).exp()
}

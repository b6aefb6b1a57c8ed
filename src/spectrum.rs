//! Discrete magnitude spectrum of a synthesised field trace.
//!
//! A bare forward DFT `|Σ x_j e^{−2πi jk/N}|` for display: no window, no zero
//! padding, no normalisation. The output has the same length as the input.

use rustfft::FftPlanner;

use crate::errors::{Result, SpectroscopyError};
use crate::math::{CScalar, Scalar};
use crate::sweep::Curve;

/// Fewest samples for which a spectrum is defined.
pub const MIN_SPECTRUM_LEN: usize = 2;

/// Magnitude of the unnormalised forward DFT of `samples`.
pub fn magnitude_spectrum(samples: &[Scalar]) -> Result<Curve> {
    if samples.len() < MIN_SPECTRUM_LEN {
        return Err(SpectroscopyError::invalid(
            "time_grid",
            format!("spectrum needs at least {MIN_SPECTRUM_LEN} samples, got {}", samples.len()),
        ));
    }
    let mut buffer: Vec<CScalar> = samples.iter().map(|&x| CScalar::new(x, 0.0)).collect();
    let fft = FftPlanner::<Scalar>::new().plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    Ok(buffer.iter().map(|c| c.norm()).collect())
}

/// Strongest bin among the non-negative, non-DC frequencies, as `(index, magnitude)`.
#[must_use]
pub fn peak_bin(spectrum: &[Scalar]) -> Option<(usize, Scalar)> {
    let upper = spectrum.len() / 2;
    spectrum
        .iter()
        .copied()
        .enumerate()
        .take(upper + 1)
        .skip(1)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
}

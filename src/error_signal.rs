//! Demodulated error signals for single-tone FM and two-tone FM spectroscopy.
//!
//! Both signals are first-order sideband approximations built from the
//! absorption line evaluated at the carrier and at the shifted sideband
//! positions. No Bessel-series expansion is attempted.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::absorption::AbsorptionLine;
use crate::errors::{Result, SpectroscopyError};
use crate::math::Scalar;
use crate::params::SimulationParameters;
use crate::sweep::{Curve, DetuningGrid};

/// Modulation and demodulation scheme.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// Single-tone FM demodulated at the first modulation frequency.
    #[default]
    FrequencyModulation,
    /// Two-tone FM demodulated at the tones' cross beat.
    TwoToneFrequencyModulation,
    /// Both traces, with the single-tone path demodulated at `f1 - f2`.
    CombinedFmAndTtfms,
}

impl Scheme {
    /// Every scheme in display order.
    pub const ALL: [Self; 3] =
        [Self::FrequencyModulation, Self::TwoToneFrequencyModulation, Self::CombinedFmAndTtfms];

    /// Label used by the reference front end.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FrequencyModulation => "Frequency Modulation",
            Self::TwoToneFrequencyModulation => "Two Tone Frequency Modulation",
            Self::CombinedFmAndTtfms => "FM and TTFMS",
        }
    }

    /// Sideband shift used by the single-tone FM trace, if this scheme draws one.
    ///
    /// The combined scheme substitutes the beat frequency `f1 - f2` for `f1`.
    #[must_use]
    pub fn fm_shift(&self, params: &SimulationParameters) -> Option<Scalar> {
        match self {
            Self::FrequencyModulation => Some(params.mod_freq1),
            Self::TwoToneFrequencyModulation => None,
            Self::CombinedFmAndTtfms => Some(params.beat_frequency()),
        }
    }

    /// True when the scheme draws the two-tone trace.
    #[must_use]
    pub const fn includes_ttfms(&self) -> bool {
        matches!(self, Self::TwoToneFrequencyModulation | Self::CombinedFmAndTtfms)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scheme {
    type Err = SpectroscopyError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "frequency modulation" | "fm" => Ok(Self::FrequencyModulation),
            "two tone frequency modulation" | "ttfms" | "ttfm" => {
                Ok(Self::TwoToneFrequencyModulation)
            }
            "fm and ttfms" | "fm+ttfms" | "combined" => Ok(Self::CombinedFmAndTtfms),
            _ => Err(SpectroscopyError::invalid("scheme", format!("unknown scheme `{s}`"))),
        }
    }
}

/// Error-signal traces produced for one scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSignals {
    /// First trace: FM for the single-tone and combined schemes, TTFMS otherwise.
    pub primary: Curve,
    /// Second trace, present only for the combined scheme (TTFMS).
    pub secondary: Option<Curve>,
}

impl ErrorSignals {
    /// Number of traces carried.
    #[must_use]
    pub fn trace_count(&self) -> usize {
        1 + usize::from(self.secondary.is_some())
    }

    /// Iterates over the present traces.
    pub fn traces(&self) -> impl Iterator<Item = &Curve> {
        std::iter::once(&self.primary).chain(self.secondary.as_ref())
    }
}

/// Single-tone FM error signal at detuning `omega` for sideband shift `shift`.
///
/// `(M1/2) · T(ω) · [T(ω − shift) − T(ω + shift)]`
#[must_use]
pub fn fm_error(line: &AbsorptionLine, mod_index: Scalar, shift: Scalar, omega: Scalar) -> Scalar {
    (mod_index / 2.0)
        * line.transmission(omega)
        * (line.transmission(omega - shift) - line.transmission(omega + shift))
}

/// Two-tone FM error signal at detuning `omega`.
///
/// `(M1/2)(M2/2) · [T(ω−f1)T(ω−f2) + T(ω+f1)T(ω+f2) − 2T(ω)²]`
#[must_use]
pub fn ttfms_error(line: &AbsorptionLine, params: &SimulationParameters, omega: Scalar) -> Scalar {
    let (f1, f2) = (params.mod_freq1, params.mod_freq2);
    let carrier = line.transmission(omega);
    (params.mod_index1 / 2.0)
        * (params.mod_index2 / 2.0)
        * (line.transmission(omega - f1) * line.transmission(omega - f2)
            + line.transmission(omega + f1) * line.transmission(omega + f2)
            - 2.0 * carrier.powi(2))
}

/// FM error signal across `grid` using an explicit sideband `shift`.
pub fn fm_error_curve(
    params: &SimulationParameters,
    grid: &DetuningGrid,
    shift: Scalar,
) -> Result<Curve> {
    if !shift.is_finite() {
        return Err(SpectroscopyError::not_finite("fm_shift", shift));
    }
    let line = AbsorptionLine::new(params)?;
    Ok(grid.map(|w| fm_error(&line, params.mod_index1, shift, w)))
}

/// Two-tone FM error signal across `grid`.
pub fn ttfms_error_curve(params: &SimulationParameters, grid: &DetuningGrid) -> Result<Curve> {
    let line = AbsorptionLine::new(params)?;
    Ok(grid.map(|w| ttfms_error(&line, params, w)))
}

/// Computes the trace(s) `scheme` calls for.
pub fn compute_error_signals(
    params: &SimulationParameters,
    grid: &DetuningGrid,
    scheme: Scheme,
) -> Result<ErrorSignals> {
    trace!(%scheme, points = grid.len(), "computing error signals");
    let signals = match scheme.fm_shift(params) {
        Some(shift) => ErrorSignals {
            primary: fm_error_curve(params, grid, shift)?,
            secondary: scheme
                .includes_ttfms()
                .then(|| ttfms_error_curve(params, grid))
                .transpose()?,
        },
        None => ErrorSignals { primary: ttfms_error_curve(params, grid)?, secondary: None },
    };
    Ok(signals)
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    use super::*;
    use crate::sweep::Grid;

    fn reference() -> SimulationParameters {
        SimulationParameters::new(10.0, 5.0, 3.0, 70.0, 1.0, 1.0)
    }

    fn grid(values: &[Scalar]) -> Grid {
        Grid::from_values(values.to_vec()).unwrap()
    }

    #[test]
    fn fm_shift_dispatch_per_scheme() {
        let p = reference();
        assert_eq!(Scheme::FrequencyModulation.fm_shift(&p), Some(5.0));
        assert_eq!(Scheme::TwoToneFrequencyModulation.fm_shift(&p), None);
        assert_eq!(Scheme::CombinedFmAndTtfms.fm_shift(&p), Some(2.0));
    }

    #[test]
    fn fm_vanishes_at_line_center() {
        let signals =
            compute_error_signals(&reference(), &grid(&[-70.0]), Scheme::FrequencyModulation)
                .unwrap();
        assert_abs_diff_eq!(signals.primary[0], 0.0, epsilon = 1.0e-15);
        assert!(signals.secondary.is_none());
    }

    #[test]
    fn fm_matches_reference_values() {
        let p = reference();
        let line = AbsorptionLine::new(&p).unwrap();
        assert_relative_eq!(
            fm_error(&line, 1.0, 5.0, -60.0),
            -0.097_167_389_642_211_9,
            max_relative = 1.0e-10
        );
        assert_relative_eq!(
            fm_error(&line, 1.0, 2.0, -60.0),
            -0.041_699_009_330_681_67,
            max_relative = 1.0e-10
        );
    }

    #[test]
    fn ttfms_matches_reference_values() {
        let p = reference();
        let line = AbsorptionLine::new(&p).unwrap();
        assert_relative_eq!(
            ttfms_error(&line, &p, -70.0),
            0.020_834_505_970_124_095,
            max_relative = 1.0e-10
        );
        assert_relative_eq!(
            ttfms_error(&line, &p, -60.0),
            0.006_740_940_588_717_686_5,
            max_relative = 1.0e-10
        );
        assert_abs_diff_eq!(
            ttfms_error(&line, &p, 0.0),
            -9.495_204_622_567_144e-11,
            epsilon = 1.0e-14
        );
    }

    #[test]
    fn ttfms_scheme_has_single_trace() {
        let g = Grid::detuning_default();
        let signals =
            compute_error_signals(&reference(), &g, Scheme::TwoToneFrequencyModulation).unwrap();
        assert_eq!(signals.trace_count(), 1);
        assert_eq!(signals.primary, ttfms_error_curve(&reference(), &g).unwrap());
    }

    #[test]
    fn combined_scheme_reproduces_fm_at_beat_frequency() {
        let p = reference();
        let g = Grid::detuning_default();
        let signals = compute_error_signals(&p, &g, Scheme::CombinedFmAndTtfms).unwrap();
        let independent = fm_error_curve(&p, &g, p.mod_freq1 - p.mod_freq2).unwrap();
        assert_eq!(signals.primary, independent);
        assert_eq!(signals.secondary, Some(ttfms_error_curve(&p, &g).unwrap()));
        assert_eq!(signals.trace_count(), 2);
        assert_eq!(signals.traces().count(), 2);
    }

    #[test]
    fn combined_differs_from_plain_fm() {
        let p = reference();
        let g = grid(&[-80.0, -60.0]);
        let plain = compute_error_signals(&p, &g, Scheme::FrequencyModulation).unwrap();
        let combined = compute_error_signals(&p, &g, Scheme::CombinedFmAndTtfms).unwrap();
        assert_ne!(plain.primary, combined.primary);
    }

    #[test]
    fn zero_line_width_propagates() {
        let p = reference().with_line_width(0.0);
        for scheme in Scheme::ALL {
            assert!(compute_error_signals(&p, &grid(&[0.0]), scheme).is_err());
        }
    }

    #[test]
    fn zero_modulation_index_silences_fm() {
        let p = SimulationParameters { mod_index1: 0.0, ..reference() };
        let g = grid(&[-75.0, -70.0, -65.0]);
        let signals = compute_error_signals(&p, &g, Scheme::FrequencyModulation).unwrap();
        assert!(signals.primary.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn scheme_parses_reference_labels() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.label().parse::<Scheme>().unwrap(), scheme);
            assert_eq!(scheme.to_string(), scheme.label());
        }
        assert_eq!("fm".parse::<Scheme>().unwrap(), Scheme::FrequencyModulation);
        assert!("am".parse::<Scheme>().is_err());
    }

    proptest! {
        #[test]
        fn fm_is_antisymmetric_for_centered_line(
            gamma in 0.01f64..1000.0,
            shift in 0.01f64..100.0,
            index in 0.0f64..10.0,
            omega in -5000.0f64..5000.0,
        ) {
            let p = SimulationParameters::new(gamma, shift, 3.0, 0.0, index, 1.0);
            let line = AbsorptionLine::new(&p).unwrap();
            let forward = fm_error(&line, index, shift, omega);
            let mirrored = fm_error(&line, index, shift, -omega);
            prop_assert!((forward + mirrored).abs() <= 1.0e-12);
        }
    }
}

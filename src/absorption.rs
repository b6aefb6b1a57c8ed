//! Gaussian absorption line on a unit transmission baseline.
//!
//! `T(ω) = 1 − D · exp(−(f_L + ω)² / (2γ²))` with fixed depth `D = 0.5`, so the
//! transmission stays within `[0.5, 1]` and dips to its minimum where
//! `f_L + ω = 0`.

use crate::constants::ABSORPTION_DEPTH;
use crate::errors::Result;
use crate::math::{gaussian, Scalar};
use crate::params::SimulationParameters;
use crate::sweep::{Curve, DetuningGrid};

/// A validated absorption line ready for repeated evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsorptionLine {
    laser_freq: Scalar,
    line_width: Scalar,
}

impl AbsorptionLine {
    /// Validates `params` and captures the line center and width.
    pub fn new(params: &SimulationParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { laser_freq: params.laser_freq, line_width: params.line_width })
    }

    /// Detuning at which the dip is deepest.
    #[must_use]
    pub fn center(&self) -> Scalar {
        -self.laser_freq
    }

    /// Transmission at detuning `omega`.
    #[must_use]
    pub fn transmission(&self, omega: Scalar) -> Scalar {
        1.0 - ABSORPTION_DEPTH * gaussian(omega - self.center(), self.line_width)
    }

    /// Transmission evaluated independently at every grid point.
    #[must_use]
    pub fn transmission_curve(&self, grid: &DetuningGrid) -> Curve {
        grid.map(|w| self.transmission(w))
    }
}

/// Transmission at a single detuning, validating `params` first.
pub fn transmission(params: &SimulationParameters, omega: Scalar) -> Result<Scalar> {
    Ok(AbsorptionLine::new(params)?.transmission(omega))
}

/// Transmission across a detuning grid, validating `params` first.
pub fn transmission_curve(params: &SimulationParameters, grid: &DetuningGrid) -> Result<Curve> {
    Ok(AbsorptionLine::new(params)?.transmission_curve(grid))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::errors::SpectroscopyError;
    use crate::sweep::Grid;

    fn params(line_width: Scalar, laser_freq: Scalar) -> SimulationParameters {
        SimulationParameters::new(line_width, 5.0, 3.0, laser_freq, 1.0, 1.0)
    }

    #[test]
    fn dip_center_transmits_half() {
        let t = transmission(&params(10.0, 70.0), -70.0).expect("valid");
        assert_relative_eq!(t, 0.5, epsilon = 1.0e-15);
    }

    #[test]
    fn far_wings_return_to_baseline() {
        let line = AbsorptionLine::new(&params(10.0, 70.0)).unwrap();
        assert_relative_eq!(line.transmission(10_000.0), 1.0);
        assert_relative_eq!(line.transmission(-10_000.0), 1.0);
    }

    #[test]
    fn one_linewidth_off_center_matches_closed_form() {
        let line = AbsorptionLine::new(&params(10.0, 70.0)).unwrap();
        let expected = 1.0 - 0.5 * (-0.5_f64).exp();
        assert_relative_eq!(line.transmission(-60.0), expected, epsilon = 1.0e-15);
    }

    #[test]
    fn curve_is_elementwise() {
        let p = params(25.0, 60.0);
        let grid = Grid::from_values(vec![-100.0, -60.0, 0.0, 40.0]).unwrap();
        let curve = transmission_curve(&p, &grid).unwrap();
        assert_eq!(curve.len(), 4);
        for (w, t) in grid.iter().zip(&curve) {
            assert_eq!(*t, transmission(&p, *w).unwrap());
        }
    }

    #[test]
    fn extreme_line_widths_stay_within_bounds() {
        let narrow = transmission(&params(1.0e-200, 70.0), -70.0).unwrap();
        assert_relative_eq!(narrow, 0.5);
        let off_center = transmission(&params(1.0e-200, 70.0), -69.0).unwrap();
        assert_relative_eq!(off_center, 1.0);
        let wide = transmission(&params(1.0e200, 70.0), 1.0e200).unwrap();
        assert!((0.5..=1.0).contains(&wide));
    }

    #[test]
    fn zero_line_width_fails() {
        let err = transmission(&params(0.0, 70.0), 0.0).unwrap_err();
        assert!(matches!(err, SpectroscopyError::InvalidParameter { name: "line_width", .. }));
    }

    proptest! {
        #[test]
        fn transmission_is_bounded(
            log_gamma in -300.0f64..300.0,
            laser in 50.0f64..100.0,
            omega in prop_oneof![-20_000.0f64..20_000.0, -1.0e300f64..1.0e300],
        ) {
            let gamma = 10f64.powf(log_gamma);
            let t = transmission(&params(gamma, laser), omega).unwrap();
            prop_assert!(t <= 1.0);
            prop_assert!(t >= 0.5);
        }

        #[test]
        fn transmission_is_symmetric_about_center(
            gamma in 0.01f64..1000.0,
            laser in 50.0f64..100.0,
            delta in 0.0f64..5000.0,
        ) {
            let line = AbsorptionLine::new(&params(gamma, laser)).unwrap();
            let c = line.center();
            let lhs = line.transmission(c + delta);
            let rhs = line.transmission(c - delta);
            prop_assert!((lhs - rhs).abs() <= 1.0e-9);
        }
    }
}

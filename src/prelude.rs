//! Convenience re-exports for driving modulation spectroscopy simulations.

pub use crate::absorption::{transmission, transmission_curve, AbsorptionLine};
pub use crate::constants::*;
pub use crate::error_signal::{
    compute_error_signals, fm_error, fm_error_curve, ttfms_error, ttfms_error_curve, ErrorSignals,
    Scheme,
};
pub use crate::errors::SpectroscopyError;
pub use crate::field::{carrier, detected_intensity, field_sample, synthesize_field, tone_factor};
pub use crate::io::{write_detuning_csv, write_time_csv};
pub use crate::math::{degrees_to_radians, gaussian, phasor, CScalar, Scalar};
pub use crate::params::{ModulationTone, SimulationParameters};
pub use crate::simulation::{
    run_simulation, SimulationConfig, SimulationEngine, SimulationOutput, SweepDriver,
};
pub use crate::spectrum::{magnitude_spectrum, peak_bin, MIN_SPECTRUM_LEN};
pub use crate::sweep::{linspace, sweep_map, Curve, DetuningGrid, Grid, GridSpec, TimeGrid};

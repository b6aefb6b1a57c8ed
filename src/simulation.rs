//! Full simulation passes: absorption line, error signals, field, and spectrum.

use tracing::{debug, debug_span, warn};

use crate::absorption::AbsorptionLine;
use crate::constants::DISPLAY_AXIS_STOP;
use crate::error_signal::{compute_error_signals, ErrorSignals, Scheme};
use crate::errors::Result;
use crate::field::synthesize_field;
use crate::math::Scalar;
use crate::params::SimulationParameters;
use crate::spectrum::{magnitude_spectrum, MIN_SPECTRUM_LEN};
use crate::sweep::{linspace, Curve, DetuningGrid, GridSpec, TimeGrid};

/// Grid layout for a simulation pass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Detuning sweep for the absorption line and error signals.
    pub detuning: GridSpec,
    /// Time window for the synthesised field.
    pub time: GridSpec,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { detuning: GridSpec::detuning_default(), time: GridSpec::time_default() }
    }
}

impl SimulationConfig {
    /// Creates a configuration from explicit grid specs.
    #[must_use]
    pub const fn new(detuning: GridSpec, time: GridSpec) -> Self {
        Self { detuning, time }
    }

    /// Builds both grids, rejecting an empty sweep or a time window too short
    /// for a spectrum.
    pub fn grids(&self) -> Result<(DetuningGrid, TimeGrid)> {
        let detuning = self.detuning.build("detuning_grid", 1)?;
        let time = self.time.build("time_grid", MIN_SPECTRUM_LEN)?;
        Ok((detuning, time))
    }
}

/// The four display traces of one run, with the axes they were computed on.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    /// Scheme the error signals were computed for.
    pub scheme: Scheme,
    /// Detuning axis shared by the absorption line and the error signals.
    pub detuning: DetuningGrid,
    /// Time axis of the field trace.
    pub time: TimeGrid,
    /// Transmission across the detuning grid.
    pub absorption: Curve,
    /// One or two demodulated error signals.
    pub error_signals: ErrorSignals,
    /// Magnitude spectrum of the field trace.
    pub spectrum: Curve,
    /// Synthesised field across the time grid.
    pub time_field: Curve,
}

impl SimulationOutput {
    /// First error-signal trace.
    #[must_use]
    pub fn error_curve1(&self) -> &Curve {
        &self.error_signals.primary
    }

    /// Second error-signal trace, if the scheme draws one.
    #[must_use]
    pub fn error_curve2(&self) -> Option<&Curve> {
        self.error_signals.secondary.as_ref()
    }

    /// Evenly spaced `[0, 10 000]` axis matching the detuning trace length,
    /// the abscissa the reference front end plots detuning traces against.
    #[must_use]
    pub fn display_axis(&self) -> Vec<Scalar> {
        linspace(0.0, DISPLAY_AXIS_STOP, self.detuning.len())
    }
}

/// Trait for anything that can turn parameters into display traces.
pub trait SimulationEngine {
    /// Executes one full pass.
    fn run(&self, params: &SimulationParameters, scheme: Scheme) -> Result<SimulationOutput>;
}

/// Stateless driver evaluating every model over freshly built grids.
#[derive(Debug, Clone, Default)]
pub struct SweepDriver {
    config: SimulationConfig,
}

impl SweepDriver {
    /// Creates a driver for the given grid layout.
    #[must_use]
    pub const fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Grid layout in use.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs on caller-supplied grids. Nothing is returned unless every trace succeeds.
    pub fn run_on(
        params: &SimulationParameters,
        scheme: Scheme,
        detuning: DetuningGrid,
        time: TimeGrid,
    ) -> Result<SimulationOutput> {
        let span = debug_span!("simulation", %scheme, detuning = detuning.len(), time = time.len());
        let _enter = span.enter();

        let line = AbsorptionLine::new(params)?;
        let absorption = line.transmission_curve(&detuning);
        let error_signals = compute_error_signals(params, &detuning, scheme)?;
        let time_field = synthesize_field(params, &time);
        let spectrum = magnitude_spectrum(&time_field)?;

        debug!(traces = 3 + error_signals.trace_count(), "simulation pass complete");
        Ok(SimulationOutput {
            scheme,
            detuning,
            time,
            absorption,
            error_signals,
            spectrum,
            time_field,
        })
    }
}

impl SimulationEngine for SweepDriver {
    fn run(&self, params: &SimulationParameters, scheme: Scheme) -> Result<SimulationOutput> {
        let (detuning, time) = self.config.grids().inspect_err(|e| {
            warn!(error = %e, "rejecting grid configuration");
        })?;
        Self::run_on(params, scheme, detuning, time)
    }
}

/// Runs one pass on the reference grids.
pub fn run_simulation(params: &SimulationParameters, scheme: Scheme) -> Result<SimulationOutput> {
    SweepDriver::default().run(params, scheme)
}

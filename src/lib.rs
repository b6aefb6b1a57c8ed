#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Reference grid extents, absorption depth, and parameter ranges.
pub mod constants;
/// Shared mathematical utilities (scalars, degree scaling, Gaussian).
pub mod math;
/// Simulation parameters and modulation tones.
pub mod params;
/// Detuning and time grids plus sweep helpers.
pub mod sweep;
/// Gaussian absorption line model.
pub mod absorption;
/// Time-domain synthesis of the modulated field.
pub mod field;
/// FM and two-tone FM error signals.
pub mod error_signal;
/// Magnitude spectrum of a field trace.
pub mod spectrum;
/// Full simulation passes producing the display traces.
pub mod simulation;
/// CSV export of simulation traces.
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

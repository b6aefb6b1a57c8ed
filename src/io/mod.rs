//! I/O helpers for exporting simulation traces.

pub mod csv;

pub use csv::*;

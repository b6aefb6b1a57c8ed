//! CSV export of simulation traces.

use std::io::{self, Write};

use crate::simulation::SimulationOutput;

/// Writes the detuning-domain traces: absorption and one or two error signals.
///
/// Columns are `detuning,absorption,error1` plus `error2` when the scheme draws
/// a second trace.
pub fn write_detuning_csv<W: Write>(mut w: W, output: &SimulationOutput) -> io::Result<()> {
    let second = output.error_curve2();
    if second.is_some() {
        writeln!(w, "detuning,absorption,error1,error2")?;
    } else {
        writeln!(w, "detuning,absorption,error1")?;
    }
    let rows = output.detuning.iter().zip(&output.absorption).zip(output.error_curve1());
    for (idx, ((omega, t), e1)) in rows.enumerate() {
        write!(w, "{omega:.16e},{t:.16e},{e1:.16e}")?;
        if let Some(e2) = second.and_then(|c| c.get(idx)) {
            write!(w, ",{e2:.16e}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Writes the time-domain field alongside its spectrum, one bin per sample.
pub fn write_time_csv<W: Write>(mut w: W, output: &SimulationOutput) -> io::Result<()> {
    writeln!(w, "time,field,bin,magnitude")?;
    let rows = output.time.iter().zip(&output.time_field).zip(&output.spectrum);
    for (bin, ((t, e), m)) in rows.enumerate() {
        writeln!(w, "{t:.16e},{e:.16e},{bin},{m:.16e}")?;
    }
    Ok(())
}

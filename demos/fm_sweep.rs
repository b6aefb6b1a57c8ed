use std::io;

use fm_spectroscopy::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(io::stderr)
        .init();

    // γ = 10, tones at 5 and 3 with unit index, carrier at 70.
    let params = SimulationParameters::new(10.0, 5.0, 3.0, 70.0, 1.0, 1.0);
    let scheme: Scheme = std::env::args()
        .nth(1)
        .map(|s| s.parse::<Scheme>())
        .transpose()?
        .unwrap_or(Scheme::CombinedFmAndTtfms);

    // Zoom onto the line so the dispersive shape is resolved.
    let config = SimulationConfig::new(GridSpec::new(-170.0, 30.0, 201), GridSpec::time_default());
    let output = SweepDriver::new(config).run(&params, scheme)?;

    if let Some((bin, magnitude)) = peak_bin(&output.spectrum) {
        eprintln!("{scheme}: strongest spectral bin {bin} (|E| = {magnitude:.3})");
    }
    write_detuning_csv(io::stdout().lock(), &output)?;
    Ok(())
}

use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result, ensure};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use chronos_simulate::{
    NoiseOffset, autoregressive, moving_average, random_walk, white_noise_from,
};

use crate::cli::SimulateArgs;
use crate::config::{ChronosConfig, OffsetToml, ProcessKind};

/// Run the `simulate` subcommand.
pub fn run(args: SimulateArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let config: ChronosConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config: {}", args.config.display()))?;

    let sim = &config.simulate;
    ensure!(sim.n > 0, "simulate.n must be positive");

    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    info!(process = ?sim.process, n = sim.n, "generating series");
    let noise = white_noise_from(sim.n, &mut rng);
    let series = match sim.process {
        ProcessKind::WhiteNoise => noise,
        ProcessKind::MovingAverage => moving_average(&noise, sim.window)
            .context("moving-average generation failed")?,
        ProcessKind::Autoregressive => {
            let offset = match sim.offset {
                OffsetToml::Previous => NoiseOffset::Previous,
                OffsetToml::Next => NoiseOffset::Next,
            };
            autoregressive(&noise, sim.intercept, sim.coefficient, offset)
                .context("filtered-noise generation failed")?
        }
        ProcessKind::RandomWalk => {
            random_walk(&noise, sim.drift).context("random-walk generation failed")?
        }
    };

    let mut text = String::with_capacity(series.len() * 20);
    for v in &series {
        writeln!(text, "{v}").expect("writing to a String cannot fail");
    }

    match args.output.or(config.output) {
        Some(path) => {
            fs::write(&path, text)
                .with_context(|| format!("failed to write series: {}", path.display()))?;
            info!(path = %path.display(), n = series.len(), "series written");
        }
        None => print!("{text}"),
    }

    Ok(())
}

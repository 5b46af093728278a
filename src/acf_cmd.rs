use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use chronos_acf::{TimeSeries, acf_profile, avf, mean};

use crate::cli::AcfArgs;

/// JSON report for a single series analysis.
#[derive(Debug, Serialize)]
pub struct AcfReport {
    /// Number of observations.
    pub n: usize,
    /// Sample mean.
    pub mean: f64,
    /// Lag-0 autocovariance (divide-by-n variance).
    pub variance: f64,
    /// Per-lag estimates, lag 0 first.
    pub lags: Vec<LagEntry>,
}

/// Autocovariance and autocorrelation at a single lag.
#[derive(Debug, Serialize)]
pub struct LagEntry {
    pub lag: usize,
    pub avf: f64,
    pub acf: f64,
}

/// Run the `acf` subcommand.
pub fn run(args: AcfArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read series: {}", args.input.display()))?;
    let values = parse_series(&raw)
        .with_context(|| format!("failed to parse series: {}", args.input.display()))?;
    let series = TimeSeries::new(values).context("invalid series")?;
    let data = series.as_slice();

    let max_lag = args.max_lag.min(data.len() - 1);
    if max_lag < args.max_lag {
        debug!(
            requested = args.max_lag,
            max_lag, "clamped max lag to series length"
        );
    }

    info!(n = data.len(), max_lag, "estimating autocorrelation");
    let rho = acf_profile(data, max_lag).context("autocorrelation estimation failed")?;
    let mut lags = Vec::with_capacity(max_lag + 1);
    for (h, &acf) in rho.iter().enumerate() {
        let gamma = avf(data, h).context("autocovariance estimation failed")?;
        lags.push(LagEntry { lag: h, avf: gamma, acf });
    }

    let report = AcfReport {
        n: data.len(),
        mean: mean(data),
        variance: avf(data, 0).context("variance estimation failed")?,
        lags,
    };

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Parses a value-per-line series file.
///
/// Blank lines and `#` comment lines are skipped.
fn parse_series(raw: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let v: f64 = trimmed
            .parse()
            .with_context(|| format!("line {}: not a number: {trimmed:?}", idx + 1))?;
        values.push(v);
    }
    Ok(values)
}

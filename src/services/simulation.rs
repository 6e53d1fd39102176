use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::domain::history::{gap_samples, Completion, GapSample};
use crate::services::csv_import::{load_history_from_csv_file, CsvImportError};
use crate::services::forecast_types::{
    ForecastDates, ForecastOutput, ForecastPercentile, ForecastReport,
};
use crate::services::histogram::{write_histogram_png, HistogramError};
use crate::services::percentiles::interpolated_sorted;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("failed to load history data: {0}")]
    LoadHistory(#[from] CsvImportError),
    #[error("history needs at least two dated entries to derive a gap")]
    InsufficientData,
    #[error("every historical gap has zero throughput, the forecast would never complete")]
    NoProgress,
    #[error("number of trials must be greater than zero")]
    InvalidTrialCount,
    #[error("failed to render histogram: {0}")]
    Histogram(#[from] HistogramError),
}

pub(crate) fn forecast_from_csv_file(
    data_path: &str,
    forecast_items: usize,
    trials: usize,
    seed: Option<u64>,
    histogram_path: &str,
) -> Result<ForecastReport, SimulationError> {
    let history = load_history_from_csv_file(data_path)?;

    let mut forecast = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            run_forecast_with_rng(&history, forecast_items, trials, &mut rng)?
        }
        None => run_forecast(&history, forecast_items, trials)?,
    };
    forecast.report.data_source = data_source_name(data_path);
    write_histogram_png(histogram_path, &forecast.results)?;
    Ok(forecast.report)
}

pub(crate) fn run_forecast(
    history: &[Completion],
    forecast_items: usize,
    trials: usize,
) -> Result<ForecastOutput, SimulationError> {
    let mut rng = rand::thread_rng();
    run_forecast_with_rng(history, forecast_items, trials, &mut rng)
}

pub(crate) fn run_forecast_with_rng<R: Rng + ?Sized>(
    history: &[Completion],
    forecast_items: usize,
    trials: usize,
    rng: &mut R,
) -> Result<ForecastOutput, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::InvalidTrialCount);
    }
    if history.len() < 2 {
        return Err(SimulationError::InsufficientData);
    }

    // Input is expected sorted already; sort defensively before pairing.
    let mut history: Vec<Completion> = history.to_vec();
    history.sort_by_key(|entry| entry.date);

    let gaps = gap_samples(&history);
    if gaps.iter().all(|gap| gap.throughput == 0) {
        return Err(SimulationError::NoProgress);
    }

    let last_date = history[history.len() - 1].date;

    let mut results = Vec::with_capacity(trials);
    for _ in 0..trials {
        results.push(simulate_single_trial(&gaps, forecast_items, rng));
    }
    results.sort_unstable();

    // Percentiles are computed on an ordinal day axis (days past the last
    // historical date) and truncated back to whole calendar days.
    let days: Vec<f64> = results.iter().map(|days_out| *days_out as f64).collect();
    let p50_days = percentile_days(&days, 50.0);
    let p85_days = percentile_days(&days, 85.0);
    let p95_days = percentile_days(&days, 95.0);

    let dates = ForecastDates {
        p50: last_date + Duration::days(p50_days),
        p85: last_date + Duration::days(p85_days),
        p95: last_date + Duration::days(p95_days),
    };

    let report = ForecastReport {
        data_source: String::new(),
        last_date: format_date(last_date),
        trials,
        forecast_items,
        p50: ForecastPercentile {
            days_out: p50_days,
            date: format_date(dates.p50),
        },
        p85: ForecastPercentile {
            days_out: p85_days,
            date: format_date(dates.p85),
        },
        p95: ForecastPercentile {
            days_out: p95_days,
            date: format_date(dates.p95),
        },
    };

    Ok(ForecastOutput {
        report,
        dates,
        results,
    })
}

/// Runs one trajectory: resample historical gaps with replacement until the
/// running total reaches the target, and report how many days past the last
/// historical date that took. A target of zero never enters the loop.
fn simulate_single_trial<R: Rng + ?Sized>(
    gaps: &[GapSample],
    forecast_items: usize,
    rng: &mut R,
) -> i64 {
    let mut completed = 0;
    let mut days_out = 0;

    while completed < forecast_items {
        // One shared index per draw: duration and throughput stay coupled,
        // which preserves the historical correlation between gap length and
        // completed count.
        let sample = gaps[rng.gen_range(0..gaps.len())];
        days_out += sample.duration_days;
        completed += sample.throughput;
    }

    days_out
}

fn percentile_days(sorted_days: &[f64], percentile: f64) -> i64 {
    interpolated_sorted(sorted_days, percentile)
        .map(|value| value.floor() as i64)
        .unwrap_or(0)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

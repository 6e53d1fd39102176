use chrono::NaiveDate;
use serde::Serialize;

/// The three fixed percentile completion dates. Read-only once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastDates {
    pub p50: NaiveDate,
    pub p85: NaiveDate,
    pub p95: NaiveDate,
}

impl ForecastDates {
    pub fn date_for(&self, percentile: u8) -> Option<NaiveDate> {
        match percentile {
            50 => Some(self.p50),
            85 => Some(self.p85),
            95 => Some(self.p95),
            _ => None,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ForecastPercentile {
    pub days_out: i64,
    pub date: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ForecastReport {
    pub data_source: String,
    pub last_date: String,
    pub trials: usize,
    pub forecast_items: usize,
    pub p50: ForecastPercentile,
    pub p85: ForecastPercentile,
    pub p95: ForecastPercentile,
}

#[derive(Serialize, Debug, Clone)]
pub struct ForecastOutput {
    pub report: ForecastReport,
    /// Same dates as the report, kept as `NaiveDate` for in-process callers.
    #[serde(skip_serializing)]
    pub dates: ForecastDates,
    /// Days past the last historical date, one entry per trial. Feeds the
    /// histogram and is not part of the percentile contract.
    pub results: Vec<i64>,
}

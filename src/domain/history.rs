use chrono::NaiveDate;

/// One observed entry of the historical record: `count` items were completed
/// between the previous recorded date and `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub date: NaiveDate,
    pub count: usize,
}

/// A resampling unit derived from two consecutive historical dates. Duration
/// and throughput always travel together; sampling them separately would
/// break the correlation between gap length and completed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapSample {
    /// Calendar days between the two dates. Zero only when the history
    /// carries duplicate dates, which the loader rejects.
    pub duration_days: i64,
    /// Items completed during the gap, i.e. the count on the later date.
    pub throughput: usize,
}

/// Derives one gap sample per consecutive pair of entries. The first entry's
/// count is a baseline snapshot with no preceding date, so it is dropped.
/// A history of `n` entries yields `n - 1` samples.
pub fn gap_samples(history: &[Completion]) -> Vec<GapSample> {
    history
        .windows(2)
        .map(|pair| GapSample {
            duration_days: (pair[1].date - pair[0].date).num_days(),
            throughput: pair[1].count,
        })
        .collect()
}

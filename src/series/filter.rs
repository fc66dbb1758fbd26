//! Date-range filtering
//!
//! Restricts generated series to a user-chosen `DateInterval`. The interval
//! itself guarantees `start <= end`, so filtering never fails.

use super::types::{DateInterval, TimeSeries, TimeSeriesPoint};

/// Points of `points` whose date lies in `interval`, order preserved
pub fn filter_points(points: &[TimeSeriesPoint], interval: &DateInterval) -> Vec<TimeSeriesPoint> {
    points
        .iter()
        .filter(|p| interval.contains(p.date))
        .copied()
        .collect()
}

/// Restrict one series to `interval`
pub fn filter_series(series: &TimeSeries, interval: &DateInterval) -> TimeSeries {
    TimeSeries::new(series.metric, filter_points(&series.points, interval))
}

/// Restrict every series to `interval`
pub fn filter_all(series: &[TimeSeries], interval: &DateInterval) -> Vec<TimeSeries> {
    let filtered: Vec<TimeSeries> = series.iter().map(|s| filter_series(s, interval)).collect();

    tracing::debug!(
        start = %interval.start(),
        end = %interval.end(),
        kept = filtered.iter().map(TimeSeries::len).sum::<usize>(),
        "Filtered series"
    );

    filtered
}

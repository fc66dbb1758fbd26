//! Core data types for the dashboard series
//!
//! This module defines the fundamental types used throughout the pipeline:
//! - `TimeSeriesPoint`: A single dated measurement
//! - `TimeSeries`: A date-ordered run of points for one metric
//! - `Metric` and `Cadence`: What is measured and how often
//! - `GridPoint`: One cell of the global SST snapshot
//! - `DateInterval`: The user-chosen date window

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{SeriesError, SeriesResult};

/// First day covered by the generated series
pub fn window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("static date is valid")
}

/// Last day covered by the generated series
pub fn window_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2035, 12, 31).expect("static date is valid")
}

/// A single dated measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// How often a metric is sampled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    /// Last calendar day of every month
    MonthEnd,
    /// December 31 of every year
    YearEnd,
}

impl Cadence {
    /// All sample dates of this cadence falling inside `[start, end]`, ascending
    pub fn dates(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        if start > end {
            return dates;
        }

        match self {
            Cadence::MonthEnd => {
                let (mut year, mut month) = (start.year(), start.month());
                while (year, month) <= (end.year(), end.month()) {
                    if let Some(date) = month_end(year, month) {
                        if date >= start && date <= end {
                            dates.push(date);
                        }
                    }
                    if month == 12 {
                        year += 1;
                        month = 1;
                    } else {
                        month += 1;
                    }
                }
            }
            Cadence::YearEnd => {
                for year in start.year()..=end.year() {
                    if let Some(date) = NaiveDate::from_ymd_opt(year, 12, 31) {
                        if date >= start && date <= end {
                            dates.push(date);
                        }
                    }
                }
            }
        }

        dates
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cadence::MonthEnd => write!(f, "monthly"),
            Cadence::YearEnd => write!(f, "yearly"),
        }
    }
}

/// Last calendar day of the given month
fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 12 {
        NaiveDate::from_ymd_opt(year, 12, 31)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()
    }
}

/// Chart family a metric is drawn with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    DensityMap,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::DensityMap => write!(f, "density_map"),
        }
    }
}

/// The four tabular metrics shown on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Global mean sea surface temperature
    GlobalSst,
    /// Sea surface temperature around the Korean peninsula
    KoreaSst,
    /// Heatwave days per year in Seoul
    SeoulHeatwave,
    /// Cumulative sea-level rise along the Korean coast
    KoreaSeaLevel,
}

impl Metric {
    /// All metrics in dashboard order
    pub fn all() -> &'static [Metric] {
        &[
            Metric::GlobalSst,
            Metric::KoreaSst,
            Metric::SeoulHeatwave,
            Metric::KoreaSeaLevel,
        ]
    }

    /// URL-safe identifier
    pub fn slug(&self) -> &'static str {
        match self {
            Metric::GlobalSst => "global-sst",
            Metric::KoreaSst => "korea-sst",
            Metric::SeoulHeatwave => "seoul-heatwave",
            Metric::KoreaSeaLevel => "korea-sea-level",
        }
    }

    /// Look a metric up by its slug
    pub fn from_slug(slug: &str) -> Option<Metric> {
        Metric::all().iter().copied().find(|m| m.slug() == slug)
    }

    /// Column label, also used as the y-axis title
    pub fn label(&self) -> &'static str {
        match self {
            Metric::GlobalSst => "전지구 해수면 온도(℃)",
            Metric::KoreaSst => "한반도 해수면 온도(℃)",
            Metric::SeoulHeatwave => "서울 폭염일수(일)",
            Metric::KoreaSeaLevel => "해수면 상승(mm)",
        }
    }

    /// Chart title
    pub fn title(&self) -> &'static str {
        match self {
            Metric::GlobalSst => "전지구 해수면 온도 추이",
            Metric::KoreaSst => "한반도 해수면 온도 추이",
            Metric::SeoulHeatwave => "서울 폭염일수 변화",
            Metric::KoreaSeaLevel => "한국 연안 해수면 상승 추이",
        }
    }

    pub fn cadence(&self) -> Cadence {
        match self {
            Metric::GlobalSst | Metric::KoreaSst => Cadence::MonthEnd,
            Metric::SeoulHeatwave | Metric::KoreaSeaLevel => Cadence::YearEnd,
        }
    }

    pub fn chart_kind(&self) -> ChartKind {
        match self {
            Metric::SeoulHeatwave => ChartKind::Bar,
            _ => ChartKind::Line,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Date-ordered points for one metric
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeSeries {
    pub metric: Metric,
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub fn new(metric: Metric, points: Vec<TimeSeriesPoint>) -> Self {
        Self { metric, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

/// One cell of the SST snapshot grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridPoint {
    /// Degrees north, in [-90, 90]
    pub latitude: f64,
    /// Degrees east, in [-180, 180]
    pub longitude: f64,
    pub value: f64,
}

/// Closed date interval `[start, end]`
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Create an interval, failing if `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> SeriesResult<Self> {
        if start > end {
            return Err(SeriesError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// The whole generated window
    pub fn full_window() -> Self {
        Self {
            start: window_start(),
            end: window_end(),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within this interval (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

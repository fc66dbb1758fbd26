//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON and query strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::series::{window_end, window_start, Cadence, ChartKind, Metric, TimeSeriesPoint};

/// Parse an optional `YYYY-MM-DD` query value, falling back to `default`
pub fn parse_date(value: Option<&str>, default: NaiveDate, field: &str) -> ApiResult<NaiveDate> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            ApiError::Validation(format!("Cannot parse {}: {} (expected YYYY-MM-DD)", field, s))
        }),
    }
}

// ============================================
// RANGE DTOs
// ============================================

/// Date range query parameters
#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    /// Start date, defaults to the first day of the window
    #[serde(default)]
    pub start: Option<String>,
    /// End date, defaults to the last day of the window
    #[serde(default)]
    pub end: Option<String>,
}

impl RangeParams {
    /// Parsed `(start, end)`; ordering is checked by the pipeline
    pub fn dates(&self) -> ApiResult<(NaiveDate, NaiveDate)> {
        let start = parse_date(self.start.as_deref(), window_start(), "start")?;
        let end = parse_date(self.end.as_deref(), window_end(), "end")?;
        Ok((start, end))
    }
}

/// Dashboard query parameters
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    /// Date shown on the SST map
    #[serde(default)]
    pub map_date: Option<String>,
}

/// Map query parameters
#[derive(Debug, Default, Deserialize)]
pub struct MapParams {
    #[serde(default)]
    pub date: Option<String>,
}

// ============================================
// SERIES DTOs
// ============================================

/// Catalog entry for one metric
#[derive(Debug, Serialize)]
pub struct SeriesInfo {
    pub slug: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub cadence: Cadence,
    pub chart: ChartKind,
}

impl From<Metric> for SeriesInfo {
    fn from(metric: Metric) -> Self {
        Self {
            slug: metric.slug(),
            label: metric.label(),
            title: metric.title(),
            cadence: metric.cadence(),
            chart: metric.chart_kind(),
        }
    }
}

/// List series response
#[derive(Debug, Serialize)]
pub struct SeriesListResponse {
    pub series: Vec<SeriesInfo>,
    /// Generated window, inclusive
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
}

/// One filtered series
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    #[serde(flatten)]
    pub info: SeriesInfo,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub count: usize,
    pub points: Vec<TimeSeriesPoint>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Whether the CSV download is offered
    pub export_enabled: bool,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_defaults() {
        let default = window_start();
        assert_eq!(parse_date(None, default, "start").unwrap(), default);
        assert_eq!(parse_date(Some(" "), default, "start").unwrap(), default);
    }

    #[test]
    fn test_parse_date_invalid() {
        let err = parse_date(Some("2020/01/01"), window_start(), "end").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.to_string().contains("end"));
    }

    #[test]
    fn test_range_params_dates() {
        let params = RangeParams {
            start: Some("2010-01-01".to_string()),
            end: None,
        };
        let (start, end) = params.dates().unwrap();

        assert_eq!(start, NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert_eq!(end, window_end());
    }
}

//! Dashboard pipeline
//!
//! One render of the page: validate the interval, generate, filter, render
//! the charts and the map, and build the CSV from the same filtered data.
//! An invalid interval stops the pipeline before anything is generated.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::export::{build_csv, ExportError, EXPORT_FILE_NAME, EXPORT_MIME};
use crate::render::{density_map, render_metric, ChartSpec, MapOptions, RenderError};
use crate::series::{
    filter_all, window_end, window_start, DateInterval, GeneratorConfig, SeriesError,
    SyntheticGenerator, TimeSeries,
};

/// Errors that stop a dashboard render
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// What the user picked on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Date shown on the SST map
    pub map_date: NaiveDate,
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self {
            start: window_start(),
            end: window_end(),
            map_date: window_start(),
        }
    }
}

impl DashboardRequest {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    /// Builder: set the map snapshot date
    pub fn map_date(mut self, date: NaiveDate) -> Self {
        self.map_date = date;
        self
    }
}

/// The downloadable CSV for one render
#[derive(Debug, Clone, Serialize)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub csv: String,
}

/// Everything one render of the page shows
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub interval: DateInterval,
    pub map_date: NaiveDate,
    /// Filtered series, in dashboard order
    pub series: Vec<TimeSeries>,
    /// One chart per series, same order
    pub charts: Vec<ChartSpec>,
    pub map: ChartSpec,
    /// Absent when export is disabled
    pub export: Option<ExportFile>,
}

/// Pipeline options
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub generator: GeneratorConfig,
    pub map: MapOptions,
    pub include_export: bool,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            map: MapOptions::default(),
            include_export: true,
        }
    }
}

impl DashboardOptions {
    pub fn new(generator: GeneratorConfig) -> Self {
        Self {
            generator,
            ..Default::default()
        }
    }
}

fn validate_interval(start: NaiveDate, end: NaiveDate) -> DashboardResult<DateInterval> {
    DateInterval::new(start, end).map_err(|e| {
        tracing::warn!(%start, %end, "Rejected date range");
        e.into()
    })
}

/// Validate the interval, then generate and filter the four series
pub fn filtered_series(
    generator: &GeneratorConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> DashboardResult<(DateInterval, Vec<TimeSeries>)> {
    let interval = validate_interval(start, end)?;
    let mut generator = SyntheticGenerator::new(generator.clone());
    let series = filter_all(&generator.generate_all(), &interval);
    Ok((interval, series))
}

/// Run one full render
pub fn render(options: &DashboardOptions, request: &DashboardRequest) -> DashboardResult<DashboardView> {
    let interval = validate_interval(request.start, request.end)?;
    let mut generator = SyntheticGenerator::new(options.generator.clone());
    let series = filter_all(&generator.generate_all(), &interval);
    let grid = generator.generate_grid(request.map_date);

    let charts = series
        .iter()
        .map(render_metric)
        .collect::<Result<Vec<_>, _>>()?;
    let map = density_map(&grid, request.map_date, &options.map)?;

    let export = if options.include_export {
        let bytes = build_csv(&series)?;
        Some(ExportFile {
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
            csv: String::from_utf8_lossy(&bytes).into_owned(),
        })
    } else {
        None
    };

    tracing::debug!(
        start = %interval.start(),
        end = %interval.end(),
        map_date = %request.map_date,
        points = charts.iter().map(ChartSpec::point_count).sum::<usize>(),
        "Rendered dashboard"
    );

    Ok(DashboardView {
        interval,
        map_date: request.map_date,
        series,
        charts,
        map,
        export,
    })
}

//! Chart Renderer
//!
//! Maps filtered series and SST grids to Plotly chart specifications.
//!
//! - Line and bar charts take a `TimeSeries` plus `SeriesAxes`
//! - Density maps take a grid snapshot plus `MapOptions`
//!
//! The only validation is that every axis field is named; an empty series
//! still renders, as an empty chart.

pub mod spec;

pub use spec::{Axis, ChartSpec, Layout, MapCenter, Mapbox, Title, Trace};

use chrono::NaiveDate;
use thiserror::Error;

use crate::series::{ChartKind, GridPoint, Metric, TimeSeries};

/// Errors that can occur while building a chart
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// An axis field was left empty
    #[error("Missing axis field: {0}")]
    MissingAxis(&'static str),

    /// The chart kind cannot draw this kind of data
    #[error("Chart kind {0:?} cannot render a time series")]
    UnsupportedKind(ChartKind),
}

/// Result type alias for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Axis metadata for a time-series chart
#[derive(Debug, Clone)]
pub struct SeriesAxes {
    /// Field plotted on x (dates)
    pub x: String,
    /// Field plotted on y (values)
    pub y: String,
    pub title: String,
}

impl SeriesAxes {
    pub fn new(x: impl Into<String>, y: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            title: title.into(),
        }
    }

    /// The dashboard's axes for a metric
    pub fn for_metric(metric: Metric) -> Self {
        Self::new("date", metric.label(), metric.title())
    }

    fn validate(&self) -> RenderResult<()> {
        if self.x.trim().is_empty() {
            return Err(RenderError::MissingAxis("x"));
        }
        if self.y.trim().is_empty() {
            return Err(RenderError::MissingAxis("y"));
        }
        Ok(())
    }
}

/// Settings for a density map
#[derive(Debug, Clone)]
pub struct MapOptions {
    pub lat: String,
    pub lon: String,
    pub z: String,
    pub radius: u32,
    pub center: MapCenter,
    pub zoom: f64,
    pub style: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            lat: "lat".to_string(),
            lon: "lon".to_string(),
            z: "sst".to_string(),
            radius: 10,
            center: MapCenter { lat: 0.0, lon: 0.0 },
            zoom: 0.0,
            style: "carto-positron".to_string(),
        }
    }
}

impl MapOptions {
    fn validate(&self) -> RenderResult<()> {
        for (name, field) in [("lat", &self.lat), ("lon", &self.lon), ("z", &self.z)] {
            if field.trim().is_empty() {
                return Err(RenderError::MissingAxis(name));
            }
        }
        Ok(())
    }
}

/// Render a series as a line or bar chart
pub fn render_series(series: &TimeSeries, kind: ChartKind, axes: &SeriesAxes) -> RenderResult<ChartSpec> {
    axes.validate()?;

    let x: Vec<NaiveDate> = series.dates().collect();
    let y: Vec<f64> = series.values().collect();
    let name = axes.y.clone();
    let hovertemplate = format!("{}=%{{x}}<br>{}=%{{y}}<extra></extra>", axes.x, axes.y);

    let trace = match kind {
        ChartKind::Line => Trace::Scatter {
            mode: "lines",
            name,
            x,
            y,
            hovertemplate,
        },
        ChartKind::Bar => Trace::Bar {
            name,
            x,
            y,
            hovertemplate,
        },
        ChartKind::DensityMap => return Err(RenderError::UnsupportedKind(kind)),
    };

    Ok(ChartSpec {
        kind,
        data: vec![trace],
        layout: Layout {
            title: Title::new(axes.title.clone()),
            xaxis: Some(Axis {
                title: Title::new(axes.x.clone()),
            }),
            yaxis: Some(Axis {
                title: Title::new(axes.y.clone()),
            }),
            mapbox: None,
        },
    })
}

/// Render a series with its metric's chart kind and labels
pub fn render_metric(series: &TimeSeries) -> RenderResult<ChartSpec> {
    render_series(
        series,
        series.metric.chart_kind(),
        &SeriesAxes::for_metric(series.metric),
    )
}

/// Title of the SST map for a snapshot date
pub fn map_title(date: NaiveDate) -> String {
    format!("{} 기준 전 지구 해수온(℃)", date.format("%Y-%m"))
}

/// Render an SST grid snapshot as a density map
pub fn density_map(grid: &[GridPoint], date: NaiveDate, options: &MapOptions) -> RenderResult<ChartSpec> {
    options.validate()?;

    let hovertemplate = format!(
        "{}=%{{lat}}<br>{}=%{{lon}}<br>{}=%{{z}}<extra></extra>",
        options.lat, options.lon, options.z
    );

    let trace = Trace::DensityMapbox {
        lat: grid.iter().map(|p| p.latitude).collect(),
        lon: grid.iter().map(|p| p.longitude).collect(),
        z: grid.iter().map(|p| p.value).collect(),
        radius: options.radius,
        hovertemplate,
    };

    Ok(ChartSpec {
        kind: ChartKind::DensityMap,
        data: vec![trace],
        layout: Layout {
            title: Title::new(map_title(date)),
            xaxis: None,
            yaxis: None,
            mapbox: Some(Mapbox {
                style: options.style.clone(),
                center: options.center,
                zoom: options.zoom,
            }),
        },
    })
}

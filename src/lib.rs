//! # Seawatch
//!
//! Ocean Warming Dashboard - synthetic sea surface temperature, heatwave and
//! sea-level series rendered as an interactive web page with a CSV download.
//!
//! ## Features
//!
//! - **Synthetic series**: Trend-plus-noise data over 2000-2035, fresh on every render
//! - **Date filtering**: Inclusive `[start, end]` ranges, reversed ranges rejected
//! - **Charts**: Plotly line, bar and density-map specifications
//! - **Export**: Outer-joined `climate_dashboard.csv`
//!
//! ## Modules
//!
//! - [`series`]: Data types, generator and range filter
//! - [`render`]: Chart specifications
//! - [`export`]: CSV export builder
//! - [`dashboard`]: One-shot render pipeline
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use seawatch::dashboard::{render, DashboardOptions, DashboardRequest};
//! use chrono::NaiveDate;
//!
//! let request = DashboardRequest::new(
//!     NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2010, 3, 31).unwrap(),
//! );
//! let view = render(&DashboardOptions::default(), &request).unwrap();
//!
//! assert_eq!(view.series[0].len(), 3);
//! assert!(view.export.unwrap().csv.starts_with("date,"));
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod render;
pub mod series;

// Re-export top-level types for convenience
pub use series::{
    DateInterval, GeneratorConfig, GridPoint, Metric, SeriesError, SyntheticGenerator, TimeSeries,
    TimeSeriesPoint,
};

pub use render::{ChartSpec, MapOptions, RenderError};

pub use export::{ExportError, ExportTable};

pub use dashboard::{DashboardError, DashboardOptions, DashboardRequest, DashboardView};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};

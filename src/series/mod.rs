//! Seawatch Series
//!
//! This module provides the data side of the dashboard:
//!
//! - **types**: Core data structures (TimeSeriesPoint, Metric, DateInterval)
//! - **generator**: Synthetic trend-plus-noise series and the SST grid
//! - **filter**: Date-range restriction
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//!   GeneratorConfig → SyntheticGenerator → TimeSeries (full window)
//!                                              ↓
//!                             DateInterval → filter → TimeSeries (requested range)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seawatch::series::{filter_series, DateInterval, GeneratorConfig, Metric, SyntheticGenerator};
//! use chrono::NaiveDate;
//!
//! let mut generator = SyntheticGenerator::new(GeneratorConfig::default());
//! let global = generator.generate(Metric::GlobalSst);
//!
//! let interval = DateInterval::new(
//!     NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2010, 3, 31).unwrap(),
//! ).unwrap();
//!
//! assert_eq!(filter_series(&global, &interval).len(), 3);
//! ```

pub mod error;
pub mod filter;
pub mod generator;
pub mod types;

pub use error::{SeriesError, SeriesResult};
pub use filter::{filter_all, filter_points, filter_series};
pub use generator::{GeneratorConfig, SyntheticGenerator};
pub use types::{
    window_end, window_start, Cadence, ChartKind, DateInterval, GridPoint, Metric, TimeSeries,
    TimeSeriesPoint,
};

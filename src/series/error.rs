//! Series error types
//!
//! Defines the errors that can occur while shaping series for display.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in the series layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// Requested interval is reversed (start > end)
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },
}

/// Result type alias for series operations
pub type SeriesResult<T> = Result<T, SeriesError>;

//! Export Builder
//!
//! Outer-joins the dashboard series on date and serializes the result as the
//! downloadable `climate_dashboard.csv`.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::series::TimeSeries;

/// File name offered for download
pub const EXPORT_FILE_NAME: &str = "climate_dashboard.csv";

/// MIME type of the export
pub const EXPORT_MIME: &str = "text/csv";

/// Errors that can occur while writing the export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl<W> From<csv::IntoInnerError<W>> for ExportError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        ExportError::Io(err.into_error())
    }
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// One joined row: a date and one cell per column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub values: Vec<Option<f64>>,
}

/// Series outer-joined on date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTable {
    /// Value column names, in input order (the `date` column is implicit)
    pub columns: Vec<String>,
    /// Rows sorted by date
    pub rows: Vec<ExportRow>,
}

impl ExportTable {
    /// Outer-join `series` on date
    pub fn outer_join(series: &[TimeSeries]) -> Self {
        let columns: Vec<String> = series.iter().map(|s| s.metric.label().to_string()).collect();

        let mut joined: BTreeMap<NaiveDate, Vec<Option<f64>>> = BTreeMap::new();
        for (col, s) in series.iter().enumerate() {
            for point in &s.points {
                let cells = joined
                    .entry(point.date)
                    .or_insert_with(|| vec![None; columns.len()]);
                cells[col] = Some(point.value);
            }
        }

        let rows = joined
            .into_iter()
            .map(|(date, values)| ExportRow { date, values })
            .collect();

        Self { columns, rows }
    }

    /// Header row: `date` followed by every column
    pub fn header(&self) -> Vec<&str> {
        std::iter::once("date")
            .chain(self.columns.iter().map(String::as_str))
            .collect()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.rows.iter().map(|r| r.date)
    }

    /// Serialize to UTF-8 CSV bytes
    pub fn to_csv(&self) -> ExportResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(self.header())?;

        for row in &self.rows {
            let mut record = Vec::with_capacity(row.values.len() + 1);
            record.push(row.date.format("%Y-%m-%d").to_string());
            record.extend(
                row.values
                    .iter()
                    .map(|v| v.map(|v| v.to_string()).unwrap_or_default()),
            );
            writer.write_record(&record)?;
        }

        writer.flush()?;
        let bytes = writer.into_inner()?;

        tracing::debug!(rows = self.rows.len(), bytes = bytes.len(), "Built CSV export");
        Ok(bytes)
    }
}

/// Join `series` and serialize it in one step
pub fn build_csv(series: &[TimeSeries]) -> ExportResult<Vec<u8>> {
    ExportTable::outer_join(series).to_csv()
}

//! Export Routes
//!
//! - GET /api/v1/export - Download the filtered series as `climate_dashboard.csv`

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::dto::RangeParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::filtered_series;
use crate::export::{build_csv, EXPORT_FILE_NAME, EXPORT_MIME};

/// GET /api/v1/export
///
/// Outer-joins the four filtered series on date and returns them as CSV.
pub async fn export_csv(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeParams>,
) -> ApiResult<Response> {
    if !state.config.enable_export {
        return Err(ApiError::Validation(
            "Export feature is disabled".to_string(),
        ));
    }

    let (start, end) = params.dates()?;
    let (_, series) = filtered_series(state.generator(), start, end)?;
    let body = build_csv(&series)?;

    tracing::info!(%start, %end, bytes = body.len(), "CSV export served");

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                format!("{}; charset=utf-8", EXPORT_MIME),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        Body::from(body),
    )
        .into_response())
}

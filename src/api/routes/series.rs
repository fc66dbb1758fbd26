//! Series Routes
//!
//! - GET /api/v1/series - List the dashboard metrics
//! - GET /api/v1/series/:slug - One filtered series

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{RangeParams, SeriesInfo, SeriesListResponse, SeriesResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::series::{
    filter_series, window_end, window_start, DateInterval, Metric, SyntheticGenerator,
};

/// GET /api/v1/series
pub async fn list_series() -> Json<SeriesListResponse> {
    Json(SeriesListResponse {
        series: Metric::all().iter().map(|&m| SeriesInfo::from(m)).collect(),
        window_start: window_start(),
        window_end: window_end(),
    })
}

/// GET /api/v1/series/:slug
///
/// Generates the requested metric and restricts it to `start..=end`.
pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<RangeParams>,
) -> ApiResult<Json<SeriesResponse>> {
    let metric = Metric::from_slug(&slug)
        .ok_or_else(|| ApiError::NotFound(format!("series {}", slug)))?;

    let (start, end) = params.dates()?;
    let interval = DateInterval::new(start, end)?;

    let mut generator = SyntheticGenerator::new(state.generator().clone());
    let series = filter_series(&generator.generate(metric), &interval);

    Ok(Json(SeriesResponse {
        info: SeriesInfo::from(metric),
        start,
        end,
        count: series.len(),
        points: series.points,
    }))
}

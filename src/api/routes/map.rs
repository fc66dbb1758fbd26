//! Map Routes
//!
//! - GET /api/v1/map - SST density map for one date

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{parse_date, MapParams};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::render::{density_map, ChartSpec};
use crate::series::{window_start, SyntheticGenerator};

/// GET /api/v1/map
///
/// A fresh grid is drawn on every call, matching the slider on the page.
pub async fn get_map(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MapParams>,
) -> ApiResult<Json<ChartSpec>> {
    let date = parse_date(params.date.as_deref(), window_start(), "date")?;

    let mut generator = SyntheticGenerator::new(state.generator().clone());
    let grid = generator.generate_grid(date);
    let chart = density_map(&grid, date, &state.dashboard.map)?;

    Ok(Json(chart))
}

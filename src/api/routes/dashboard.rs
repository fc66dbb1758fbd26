//! Dashboard Routes
//!
//! - GET /api/v1/dashboard - One full render: charts, map and CSV

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{parse_date, DashboardParams};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{self, DashboardRequest, DashboardView};
use crate::series::{window_end, window_start};

/// GET /api/v1/dashboard
///
/// Renders the whole page for the chosen range and map date. A reversed
/// range answers 400 and nothing is generated.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardParams>,
) -> ApiResult<Json<DashboardView>> {
    let request = DashboardRequest {
        start: parse_date(params.start.as_deref(), window_start(), "start")?,
        end: parse_date(params.end.as_deref(), window_end(), "end")?,
        map_date: parse_date(params.map_date.as_deref(), window_start(), "map_date")?,
    };

    let view = dashboard::render(&state.dashboard, &request)?;

    tracing::info!(
        start = %request.start,
        end = %request.end,
        map_date = %request.map_date,
        "Dashboard rendered"
    );

    Ok(Json(view))
}

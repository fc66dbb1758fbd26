//! Seawatch HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The dashboard page
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard` - Charts, map and CSV for one render
//!
//! ## Series
//! - `GET /api/v1/series` - List metrics
//! - `GET /api/v1/series/:slug` - One filtered series
//!
//! ## Map
//! - `GET /api/v1/map` - SST density map for one date
//!
//! ## Export
//! - `GET /api/v1/export` - Download `climate_dashboard.csv`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use seawatch::api::{serve, AppState};
//! use seawatch::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::new(config.api.clone(), config.generator.clone());
//!     serve(state, &config.api).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// CORS policy from the configured origins; an empty list allows any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET])
}

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Dashboard routes
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        // Series routes
        .route("/series", get(routes::series::list_series))
        .route("/series/:slug", get(routes::series::get_series))
        // Map routes
        .route("/map", get(routes::map::get_map))
        // Export routes
        .route("/export", get(routes::export::export_csv));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Seawatch dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Seawatch dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::GeneratorConfig;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(ApiConfig::default(), GeneratorConfig::default().seed(42));
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["export_enabled"], true);
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("/api/v1/dashboard"));
        assert!(html.contains("CSV 다운로드"));
        assert!(html.contains("catch (err)"));
    }

    #[tokio::test]
    async fn test_dashboard_default_range() {
        let response = get(create_test_app(), "/api/v1/dashboard").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["charts"].as_array().unwrap().len(), 4);
        assert_eq!(json["charts"][0]["data"][0]["x"].as_array().unwrap().len(), 432);
        assert_eq!(json["charts"][2]["data"][0]["type"], "bar");
        assert_eq!(json["map"]["data"][0]["type"], "densitymapbox");
        assert_eq!(json["export"]["file_name"], "climate_dashboard.csv");
    }

    #[tokio::test]
    async fn test_dashboard_first_quarter() {
        let response = get(
            create_test_app(),
            "/api/v1/dashboard?start=2010-01-01&end=2010-03-31&map_date=2010-02-15",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let x = json["charts"][0]["data"][0]["x"].as_array().unwrap().clone();
        assert_eq!(x, vec!["2010-01-31", "2010-02-28", "2010-03-31"]);
        assert_eq!(json["map"]["layout"]["title"]["text"], "2010-02 기준 전 지구 해수온(℃)");
    }

    #[tokio::test]
    async fn test_dashboard_reversed_range() {
        let response = get(
            create_test_app(),
            "/api/v1/dashboard?start=2020-06-01&end=2020-01-01",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "INVALID_DATE_RANGE");
        assert!(json.get("charts").is_none());
        assert!(json.get("export").is_none());
    }

    #[tokio::test]
    async fn test_dashboard_bad_date() {
        let response = get(create_test_app(), "/api/v1/dashboard?start=June").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_series() {
        let response = get(create_test_app(), "/api/v1/series").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let slugs: Vec<&str> = json["series"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["slug"].as_str().unwrap())
            .collect();
        assert_eq!(
            slugs,
            vec!["global-sst", "korea-sst", "seoul-heatwave", "korea-sea-level"]
        );
        assert_eq!(json["window_start"], "2000-01-01");
    }

    #[tokio::test]
    async fn test_get_series() {
        let response = get(
            create_test_app(),
            "/api/v1/series/seoul-heatwave?start=2010-01-01&end=2014-12-31",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["slug"], "seoul-heatwave");
        assert_eq!(json["cadence"], "year_end");
        assert_eq!(json["count"], 5);
        assert_eq!(json["points"][0]["date"], "2010-12-31");
    }

    #[tokio::test]
    async fn test_get_unknown_series() {
        let response = get(create_test_app(), "/api/v1/series/arctic-ice").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_map() {
        let response = get(create_test_app(), "/api/v1/map?date=2033-03-03").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"][0]["z"].as_array().unwrap().len(), 540);
        assert_eq!(json["layout"]["mapbox"]["style"], "carto-positron");
    }

    #[tokio::test]
    async fn test_export_csv() {
        let response = get(
            create_test_app(),
            "/api/v1/export?start=2010-01-01&end=2010-12-31",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"climate_dashboard.csv\""
        );

        let csv = body_text(response).await;
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "date,전지구 해수면 온도(℃),한반도 해수면 온도(℃),서울 폭염일수(일),해수면 상승(mm)"
        );
        assert_eq!(lines.len(), 13);
        assert!(lines[12].starts_with("2010-12-31,"));
    }

    #[tokio::test]
    async fn test_export_reversed_range() {
        let response = get(
            create_test_app(),
            "/api/v1/export?start=2011-01-01&end=2010-01-01",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_disabled() {
        let config = ApiConfig {
            enable_export: false,
            ..ApiConfig::default()
        };
        let app = build_router(AppState::new(config, GeneratorConfig::default()));

        let response = get(app.clone(), "/api/v1/export").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(get(app, "/api/v1/dashboard").await).await;
        assert!(json["export"].is_null());
    }

    #[tokio::test]
    async fn test_same_seed_same_dashboard() {
        let uri = "/api/v1/dashboard?start=2001-01-01&end=2001-12-31";
        let a = body_json(get(create_test_app(), uri).await).await;
        let b = body_json(get(create_test_app(), uri).await).await;
        assert_eq!(a["charts"], b["charts"]);
    }

    #[tokio::test]
    async fn test_seeded_endpoints_agree_with_dashboard() {
        let range = "start=2010-01-01&end=2010-12-31";
        let dashboard = body_json(
            get(
                create_test_app(),
                &format!("/api/v1/dashboard?{}&map_date=2012-05-20", range),
            )
            .await,
        )
        .await;

        let series = body_json(
            get(create_test_app(), &format!("/api/v1/series/korea-sst?{}", range)).await,
        )
        .await;
        assert_eq!(series["points"], dashboard["series"][1]["points"]);

        let map = body_json(get(create_test_app(), "/api/v1/map?date=2012-05-20").await).await;
        assert_eq!(map, dashboard["map"]);

        let csv = body_text(get(create_test_app(), &format!("/api/v1/export?{}", range)).await).await;
        assert_eq!(csv, dashboard["export"]["csv"].as_str().unwrap());
    }
}

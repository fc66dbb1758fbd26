//! Page Routes
//!
//! - GET / - The dashboard page

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../index.html");

/// GET /
///
/// Static page; all data comes from `/api/v1/dashboard`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

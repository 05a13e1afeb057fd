//! Dashboard route handler.
//!
//! Serves the embedded single-page front end.

use axum::response::{Html, IntoResponse};

const DASHBOARD_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the analysis page.
pub async fn index() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

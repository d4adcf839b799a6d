// GET handlers: dashboard page, version

use axum::response::{Html, IntoResponse};

use crate::version::{NAME, VERSION};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / — single-page dashboard; data comes from /api/meta and /api/summary.
pub(super) async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// GET /version — returns service name and version.
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

// HTTP routes: dashboard page + JSON API over the report snapshot

mod api;
mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::report::Report;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) report: Arc<Report>,
    pub(crate) config: AppConfig,
}

pub fn app(report: Arc<Report>, config: AppConfig) -> Router {
    let state = AppState { report, config };
    Router::new()
        .route("/", get(http::index_handler)) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/meta", get(api::meta_handler)) // GET /api/meta
        .route("/api/summary", get(api::summary_handler)) // GET /api/summary
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

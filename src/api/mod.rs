// src/api/mod.rs

pub mod handler;
pub mod render;

use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use handler::{
    analyze_api_handler, analyze_form_handler, dashboard_handler, health_handler,
    raw_report_handler, report_handler,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/analyze", post(analyze_form_handler))
        .route("/api/analyze", post(analyze_api_handler))
        .route("/api/report", get(report_handler))
        .route("/api/report/raw", get(raw_report_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use crate::api::handler::dashboard::BLANK_URL_NOTICE;
use crate::models::{AnalyzeParams, AppState, ErrorResponse, ReportResponse};
use crate::services::run_analysis;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn report_handler(State(state): State<Arc<AppState>>) -> Json<ReportResponse> {
    Json(state.store.snapshot().await.to_response())
}

// Raw-JSON inspector: the latest document exactly as PageSpeed returned it.
pub async fn raw_report_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.store.snapshot().await.result {
        Some(result) => Json(result.raw().clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No analysis result available yet".to_string(),
            }),
        )
            .into_response(),
    }
}

pub async fn analyze_api_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<AnalyzeParams>,
) -> Response {
    let Some(url) = params.trimmed_url() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: BLANK_URL_NOTICE.to_string(),
            }),
        )
            .into_response();
    };

    let snapshot = run_analysis(&state, url, params.strategy).await;
    Json(snapshot.to_response()).into_response()
}

pub async fn health_handler() -> &'static str {
    "OK"
}

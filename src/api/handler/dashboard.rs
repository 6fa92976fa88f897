use crate::api::render::render_dashboard;
use crate::models::{AnalyzeParams, AppState};
use crate::services::run_analysis;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use log::debug;
use std::sync::Arc;

pub const BLANK_URL_NOTICE: &str = "Please enter a URL to analyze.";

pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.store.snapshot().await;
    Html(render_dashboard(&snapshot, None))
}

// Runs the analysis to completion, then sends the browser back to the dashboard.
pub async fn analyze_form_handler(
    State(state): State<Arc<AppState>>,
    Form(params): Form<AnalyzeParams>,
) -> Response {
    let Some(url) = params.trimmed_url() else {
        debug!("Ignoring submission with a blank URL");
        let snapshot = state.store.snapshot().await;
        return (
            StatusCode::BAD_REQUEST,
            Html(render_dashboard(&snapshot, Some(BLANK_URL_NOTICE))),
        )
            .into_response();
    };

    run_analysis(&state, url, params.strategy).await;
    Redirect::to("/").into_response()
}

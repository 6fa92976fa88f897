pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::models::AppState;
use crate::services::{PagespeedClient, RequestError};
use axum::Router;
use std::sync::Arc;

/// Build the application router and its shared state from a resolved config.
pub fn build_app(config: Config) -> Result<Router, RequestError> {
    let client = PagespeedClient::new(config.endpoint.clone(), config.timeout)?;
    let state = Arc::new(AppState::new(config, client));
    Ok(api::router(state))
}

use crate::models::analysis::{AnalysisRequest, Strategy};
use crate::models::AppState;
use crate::services::report_service::store::ReportSnapshot;
use log::{info, warn};

/// Issue one analysis and record its outcome in the store.
///
/// The caller has already checked that `url` is not blank.
pub async fn run_analysis(state: &AppState, url: &str, strategy: Strategy) -> ReportSnapshot {
    let request = AnalysisRequest::new(url, strategy, state.config.api_key.clone());
    state.store.begin(request.clone()).await;

    match state.client.analyze(&request).await {
        Ok(result) => {
            info!("Analysis completed for {} ({})", request.url, request.strategy);
            state.store.succeed(result).await;
        }
        Err(e) => {
            warn!("Analysis failed for {}: {}", request.url, e);
            state.store.fail(e.to_string()).await;
        }
    }

    state.store.snapshot().await
}

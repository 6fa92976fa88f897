use crate::models::analysis::{AnalysisRequest, AnalysisResult, AnalysisStatus, DerivedMetrics};
use crate::models::api::ReportResponse;
use crate::services::site_audit_service::derive_metrics;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything the dashboard shows, copied out of the store in one piece.
#[derive(Debug, Clone, Default)]
pub struct ReportSnapshot {
    pub status: AnalysisStatus,
    pub request: Option<AnalysisRequest>,
    pub result: Option<Arc<AnalysisResult>>,
    pub error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReportSnapshot {
    // Recomputed on every read so it can never drift from `result`.
    pub fn metrics(&self) -> Option<DerivedMetrics> {
        self.result.as_deref().map(derive_metrics)
    }

    pub fn to_response(&self) -> ReportResponse {
        ReportResponse {
            status: self.status,
            request: self.request.clone(),
            error: self.error.clone(),
            metrics: self.metrics(),
            updated_at: self.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Single slot holding the latest result or error.
///
/// A new submission moves to `Loading` without clearing the last good result;
/// a failure records the message and leaves that result in place.
#[derive(Debug, Default)]
pub struct ReportStore {
    slot: Mutex<ReportSnapshot>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn begin(&self, request: AnalysisRequest) {
        let mut slot = self.slot.lock().await;
        slot.status = AnalysisStatus::Loading;
        slot.request = Some(request);
        slot.error = None;
    }

    pub async fn succeed(&self, result: Arc<AnalysisResult>) {
        let mut slot = self.slot.lock().await;
        slot.status = AnalysisStatus::Success;
        slot.result = Some(result);
        slot.error = None;
        slot.updated_at = Some(Utc::now());
    }

    pub async fn fail(&self, message: String) {
        let mut slot = self.slot.lock().await;
        slot.status = AnalysisStatus::Error;
        slot.error = Some(message);
        slot.updated_at = Some(Utc::now());
    }

    pub async fn snapshot(&self) -> ReportSnapshot {
        self.slot.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::Strategy;
    use serde_json::json;

    fn request() -> AnalysisRequest {
        AnalysisRequest::new("https://example.com", Strategy::Desktop, None)
    }

    fn result(score: f64) -> Arc<AnalysisResult> {
        Arc::new(AnalysisResult::from_json(json!({
            "lighthouseResult": { "categories": { "performance": { "score": score } } }
        })))
    }

    #[tokio::test]
    async fn test_initial_state_is_idle() {
        let store = ReportStore::new();
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.status, AnalysisStatus::Idle);
        assert!(snapshot.result.is_none());
        assert!(snapshot.metrics().is_none());
    }

    #[tokio::test]
    async fn test_loading_keeps_previous_result() {
        let store = ReportStore::new();
        store.begin(request()).await;
        store.succeed(result(0.5)).await;

        store.begin(request()).await;
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.status, AnalysisStatus::Loading);
        assert_eq!(snapshot.metrics().and_then(|m| m.performance_pct), Some(50));
    }

    #[tokio::test]
    async fn test_failure_keeps_last_good_result() {
        let store = ReportStore::new();
        let good = result(0.92);
        store.begin(request()).await;
        store.succeed(good.clone()).await;

        store.begin(request()).await;
        store.fail("request timed out after 60s".to_string()).await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.status, AnalysisStatus::Error);
        assert_eq!(snapshot.error.as_deref(), Some("request timed out after 60s"));
        assert_eq!(snapshot.result, Some(good));
    }

    #[tokio::test]
    async fn test_loading_after_error_drops_stale_message() {
        let store = ReportStore::new();
        let good = result(0.7);
        store.begin(request()).await;
        store.succeed(good.clone()).await;
        store.begin(request()).await;
        store.fail("network error: connection refused".to_string()).await;

        store.begin(request()).await;
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.status, AnalysisStatus::Loading);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.result, Some(good));

        let response = snapshot.to_response();
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_success_replaces_result_and_clears_error() {
        let store = ReportStore::new();
        store.begin(request()).await;
        store.fail("boom".to_string()).await;
        store.begin(request()).await;
        store.succeed(result(0.3)).await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.status, AnalysisStatus::Success);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.metrics().and_then(|m| m.performance_pct), Some(30));
    }

    #[tokio::test]
    async fn test_response_omits_api_key() {
        let store = ReportStore::new();
        store
            .begin(AnalysisRequest::new(
                "https://example.com",
                Strategy::Mobile,
                Some("secret".to_string()),
            ))
            .await;
        let json = serde_json::to_string(&store.snapshot().await.to_response()).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"status\":\"loading\""));
    }
}

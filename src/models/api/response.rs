use crate::models::analysis::{AnalysisRequest, AnalysisStatus, DerivedMetrics};
use serde::Serialize;

// JSON view of the dashboard state
#[derive(Serialize, Debug, Clone)]
pub struct ReportResponse {
    pub status: AnalysisStatus,
    pub request: Option<AnalysisRequest>,
    pub error: Option<String>,
    pub metrics: Option<DerivedMetrics>,
    pub updated_at: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}

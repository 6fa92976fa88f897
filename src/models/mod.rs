// src/models/mod.rs

pub mod analysis;
pub mod api;
pub mod app;
pub mod pagespeed;

pub use analysis::{AnalysisRequest, AnalysisResult, AnalysisStatus, DerivedMetrics, Grade, Strategy};
pub use api::{AnalyzeParams, ErrorResponse, ReportResponse};
pub use app::AppState;

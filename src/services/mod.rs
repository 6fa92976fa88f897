pub mod report_service;
pub mod site_audit_service;

pub use report_service::{run_analysis, ReportSnapshot, ReportStore};
pub use site_audit_service::{derive_metrics, grade, pct, PagespeedClient, RequestError};

pub mod dashboard;
pub mod report;

pub use dashboard::{analyze_form_handler, dashboard_handler};
pub use report::{analyze_api_handler, health_handler, raw_report_handler, report_handler};

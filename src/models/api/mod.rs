pub mod params;
pub mod response;

pub use params::AnalyzeParams;
pub use response::{ErrorResponse, ReportResponse};

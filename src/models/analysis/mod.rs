pub mod metrics;
pub mod request;
pub mod result;
pub mod status;

pub use metrics::{DerivedMetrics, Grade};
pub use request::{AnalysisRequest, Strategy};
pub use result::AnalysisResult;
pub use status::AnalysisStatus;

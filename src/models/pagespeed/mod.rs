pub mod audit;
pub mod category;
pub mod report;

pub use audit::{Audit, AuditDetails};
pub use category::{Categories, Category};
pub use report::{
    LighthouseResult, PagespeedResponse, CUMULATIVE_LAYOUT_SHIFT, FINAL_SCREENSHOT,
    LARGEST_CONTENTFUL_PAINT, TOTAL_BLOCKING_TIME,
};

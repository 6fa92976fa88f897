pub mod run;
pub mod store;

pub use run::run_analysis;
pub use store::{ReportSnapshot, ReportStore};

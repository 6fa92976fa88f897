// src/services/site_audit_service/mod.rs

pub mod compute;
pub mod pagespeed;

pub use compute::{derive_metrics, grade, pct};
pub use pagespeed::{PagespeedClient, RequestError, ResultCache};

pub mod metrics;

pub use metrics::{audit_display, derive_metrics, grade, pct, screenshot, PLACEHOLDER};

use serde::{Deserialize, Serialize};

// pub struct for individual audit results
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub score: Option<f64>,
    pub display_value: Option<String>,
    pub numeric_value: Option<f64>,
    pub details: Option<AuditDetails>,
}

// `details.data` carries the base64 data URI for the final-screenshot audit
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct AuditDetails {
    pub data: Option<String>,
}

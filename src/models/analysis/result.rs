use crate::models::pagespeed::PagespeedResponse;
use log::warn;
use serde_json::Value;

/// A completed PageSpeed document: the raw JSON as returned, plus the typed view
/// decoded from it once at the response boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    raw: Value,
    view: PagespeedResponse,
}

impl AnalysisResult {
    pub fn from_json(raw: Value) -> Self {
        // A shape mismatch is not a request failure; every field reads as absent.
        let view = match serde_json::from_value::<PagespeedResponse>(raw.clone()) {
            Ok(view) => view,
            Err(e) => {
                warn!("PageSpeed response did not match the expected shape: {}", e);
                PagespeedResponse::default()
            }
        };
        Self { raw, view }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn view(&self) -> &PagespeedResponse {
        &self.view
    }
}

use crate::models::analysis::Strategy;
use serde::Deserialize;

// Submitted by the dashboard form and by `POST /api/analyze`
#[derive(Deserialize, Debug, Clone)]
pub struct AnalyzeParams {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub strategy: Strategy,
}

impl AnalyzeParams {
    /// The URL with surrounding whitespace removed, or `None` when nothing was entered.
    pub fn trimmed_url(&self) -> Option<&str> {
        let url = self.url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }
}

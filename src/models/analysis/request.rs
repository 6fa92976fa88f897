use serde::{Deserialize, Serialize};
use std::fmt;

// Simulated device profile for the Lighthouse run
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Mobile,
    #[default]
    Desktop,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Mobile => "mobile",
            Strategy::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One issued analysis. Doubles as the memo cache key, so it is compared by
/// value over all three fields.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalysisRequest {
    pub url: String,
    pub strategy: Strategy,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl AnalysisRequest {
    pub fn new(url: impl Into<String>, strategy: Strategy, api_key: Option<String>) -> Self {
        Self {
            url: url.into(),
            strategy,
            api_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_strategy_default_and_display() {
        assert_eq!(Strategy::default(), Strategy::Desktop);
        assert_eq!(Strategy::Mobile.to_string(), "mobile");
    }

    #[test]
    fn test_strategy_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Strategy::Mobile).unwrap(), "\"mobile\"");
        let parsed: Strategy = serde_json::from_str("\"desktop\"").unwrap();
        assert_eq!(parsed, Strategy::Desktop);
    }

    #[test]
    fn test_request_key_covers_all_fields() {
        let mut keys = HashSet::new();
        keys.insert(AnalysisRequest::new("https://example.com", Strategy::Desktop, None));
        keys.insert(AnalysisRequest::new("https://example.com", Strategy::Desktop, None));
        keys.insert(AnalysisRequest::new("https://example.com", Strategy::Mobile, None));
        keys.insert(AnalysisRequest::new(
            "https://example.com",
            Strategy::Desktop,
            Some("k".to_string()),
        ));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_request_never_serializes_api_key() {
        let request = AnalysisRequest::new(
            "https://example.com",
            Strategy::Mobile,
            Some("secret".to_string()),
        );
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"strategy\":\"mobile\""));
    }
}

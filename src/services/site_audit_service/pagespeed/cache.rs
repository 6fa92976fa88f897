use crate::models::analysis::{AnalysisRequest, AnalysisResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Memo of successful results keyed by the full `(url, strategy, api key)` request.
///
/// Entries live for the whole process; there is no eviction or TTL. A hit only
/// saves a network round trip, the result is the same one the API gave before.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: Mutex<HashMap<AnalysisRequest, Arc<AnalysisResult>>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, request: &AnalysisRequest) -> Option<Arc<AnalysisResult>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(request)
            .cloned()
    }

    pub fn insert(&self, request: AnalysisRequest, result: Arc<AnalysisResult>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(request, result);
    }

    pub fn entry_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::Strategy;
    use serde_json::json;

    #[test]
    fn test_cache_hit_requires_identical_request() {
        let cache = ResultCache::new();
        let request = AnalysisRequest::new("https://example.com", Strategy::Desktop, None);
        let result = Arc::new(AnalysisResult::from_json(json!({ "id": 1 })));
        cache.insert(request.clone(), result.clone());

        assert_eq!(cache.get(&request), Some(result));
        assert!(cache
            .get(&AnalysisRequest::new("https://example.com", Strategy::Mobile, None))
            .is_none());
        assert!(cache
            .get(&AnalysisRequest::new(
                "https://example.com",
                Strategy::Desktop,
                Some("key".to_string())
            ))
            .is_none());
        assert_eq!(cache.entry_count(), 1);
    }
}

use crate::models::analysis::{AnalysisRequest, AnalysisResult};
use crate::services::site_audit_service::pagespeed::cache::ResultCache;
use crate::services::site_audit_service::pagespeed::error::RequestError;
use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

// Always requested, whether or not the report shows them
pub const CATEGORIES: [&str; 3] = ["PERFORMANCE", "BEST_PRACTICES", "SEO"];

pub struct PagespeedClient {
    http: Client,
    endpoint: String,
    timeout: Duration,
    cache: ResultCache,
}

impl PagespeedClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RequestError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RequestError::network)?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            timeout,
            cache: ResultCache::new(),
        })
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Query string for one run. The key is only appended when there is one.
    pub fn query_params(request: &AnalysisRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("url", request.url.clone()),
            ("strategy", request.strategy.to_string()),
        ];
        for category in CATEGORIES {
            params.push(("category", category.to_string()));
        }
        if let Some(key) = &request.api_key {
            params.push(("key", key.clone()));
        }
        params
    }

    /// Run PageSpeed for `request`, serving a memoized result when the exact
    /// same request already succeeded.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<Arc<AnalysisResult>, RequestError> {
        if let Some(cached) = self.cache.get(request) {
            debug!("Serving cached PageSpeed result for {} ({})", request.url, request.strategy);
            return Ok(cached);
        }

        info!("Running PageSpeed for {} ({})", request.url, request.strategy);
        let response = self
            .http
            .get(&self.endpoint)
            .query(&Self::query_params(request))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("PageSpeed returned {} for {}", status, request.url);
            return Err(RequestError::Status {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let raw: Value =
            serde_json::from_slice(&bytes).map_err(|e| RequestError::Decode(e.to_string()))?;

        let result = Arc::new(AnalysisResult::from_json(raw));
        self.cache.insert(request.clone(), result.clone());
        debug!("{} PageSpeed result(s) cached", self.cache.entry_count());
        Ok(result)
    }

    fn transport_error(&self, e: reqwest::Error) -> RequestError {
        if e.is_timeout() {
            RequestError::Timeout(self.timeout)
        } else {
            RequestError::network(e)
        }
    }
}

// Google wraps failures as {"error": {"message": ...}}; fall back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

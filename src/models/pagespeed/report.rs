use crate::models::pagespeed::audit::Audit;
use crate::models::pagespeed::category::Categories;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const LARGEST_CONTENTFUL_PAINT: &str = "largest-contentful-paint";
pub const TOTAL_BLOCKING_TIME: &str = "total-blocking-time";
pub const CUMULATIVE_LAYOUT_SHIFT: &str = "cumulative-layout-shift";
pub const FINAL_SCREENSHOT: &str = "final-screenshot";

/// Narrow typed view over a `runPagespeed` response.
///
/// Only the paths the report reads are modelled; everything is optional so that
/// a sparse response still decodes.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagespeedResponse {
    pub lighthouse_result: Option<LighthouseResult>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseResult {
    pub requested_url: Option<String>,
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub audits: HashMap<String, Audit>,
}

impl PagespeedResponse {
    pub fn categories(&self) -> Option<&Categories> {
        self.lighthouse_result.as_ref().map(|lh| &lh.categories)
    }

    pub fn audit(&self, key: &str) -> Option<&Audit> {
        self.lighthouse_result
            .as_ref()
            .and_then(|lh| lh.audits.get(key))
    }
}

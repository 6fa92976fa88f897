use crate::models::analysis::{AnalysisResult, DerivedMetrics, Grade};
use crate::models::pagespeed::{
    PagespeedResponse, CUMULATIVE_LAYOUT_SHIFT, FINAL_SCREENSHOT, LARGEST_CONTENTFUL_PAINT,
    TOTAL_BLOCKING_TIME,
};

pub const PLACEHOLDER: &str = "—";
pub const SCREENSHOT_PREFIX: &str = "data:image/jpeg;base64,";

/// Lighthouse score (0..1) as a whole percentage, half-to-even.
pub fn pct(score: Option<f64>) -> Option<i64> {
    score
        .filter(|s| s.is_finite())
        .map(|s| (s * 100.0).round_ties_even() as i64)
}

pub fn grade(pct: Option<i64>) -> Grade {
    match pct {
        None => Grade::Unrated,
        Some(p) if p >= 90 => Grade::A,
        Some(p) if p >= 80 => Grade::B,
        Some(p) if p >= 70 => Grade::C,
        Some(p) if p >= 60 => Grade::D,
        Some(_) => Grade::E,
    }
}

/// `displayValue` of a named audit, or the dash placeholder.
pub fn audit_display(view: &PagespeedResponse, key: &str) -> String {
    view.audit(key)
        .and_then(|a| a.display_value.as_deref())
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

/// The final screenshot data URI, only when it is a base64 JPEG.
pub fn screenshot(view: &PagespeedResponse) -> Option<&str> {
    view.audit(FINAL_SCREENSHOT)
        .and_then(|a| a.details.as_ref())
        .and_then(|d| d.data.as_deref())
        .filter(|data| data.starts_with(SCREENSHOT_PREFIX))
}

pub fn derive_metrics(result: &AnalysisResult) -> DerivedMetrics {
    let view = result.view();
    let categories = view.categories();

    let performance_pct = pct(categories.and_then(|c| c.performance_score()));
    // Best practices stands in for "structure" until it has its own weighting.
    let structure_pct = pct(categories.and_then(|c| c.best_practices_score()));
    let seo_pct = pct(categories.and_then(|c| c.seo_score()));

    DerivedMetrics {
        performance_pct,
        structure_pct,
        seo_pct,
        grade: grade(performance_pct),
        largest_contentful_paint: audit_display(view, LARGEST_CONTENTFUL_PAINT),
        total_blocking_time: audit_display(view, TOTAL_BLOCKING_TIME),
        tbt_ms: view
            .audit(TOTAL_BLOCKING_TIME)
            .and_then(|a| a.numeric_value),
        cumulative_layout_shift: audit_display(view, CUMULATIVE_LAYOUT_SHIFT),
        screenshot: screenshot(view).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pct() {
        assert_eq!(pct(Some(0.0)), Some(0));
        assert_eq!(pct(Some(1.0)), Some(100));
        assert_eq!(pct(Some(0.873)), Some(87));
        assert_eq!(pct(None), None);
    }

    #[test]
    fn test_pct_rounds_half_to_even() {
        assert_eq!(pct(Some(0.125)), Some(12));
        assert_eq!(pct(Some(0.875)), Some(88));
    }

    #[test]
    fn test_pct_non_finite() {
        assert_eq!(pct(Some(f64::NAN)), None);
        assert_eq!(pct(Some(f64::INFINITY)), None);
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(grade(Some(95)), Grade::A);
        assert_eq!(grade(Some(90)), Grade::A);
        assert_eq!(grade(Some(85)), Grade::B);
        assert_eq!(grade(Some(72)), Grade::C);
        assert_eq!(grade(Some(61)), Grade::D);
        assert_eq!(grade(Some(60)), Grade::D);
        assert_eq!(grade(Some(40)), Grade::E);
        assert_eq!(grade(None), Grade::Unrated);
        assert_eq!(grade(None).to_string(), "—");
    }

    #[test]
    fn test_screenshot_requires_jpeg_prefix() {
        let jpeg = AnalysisResult::from_json(json!({
            "lighthouseResult": { "audits": { "final-screenshot": {
                "details": { "data": "data:image/jpeg;base64,/9j/4AAQ" }
            } } }
        }));
        assert_eq!(
            screenshot(jpeg.view()),
            Some("data:image/jpeg;base64,/9j/4AAQ")
        );

        let png = AnalysisResult::from_json(json!({
            "lighthouseResult": { "audits": { "final-screenshot": {
                "details": { "data": "data:image/png;base64,iVBOR" }
            } } }
        }));
        assert_eq!(screenshot(png.view()), None);

        let missing = AnalysisResult::from_json(json!({ "lighthouseResult": {} }));
        assert_eq!(screenshot(missing.view()), None);
    }

    #[test]
    fn test_derive_metrics_full_response() {
        let result = AnalysisResult::from_json(json!({
            "lighthouseResult": {
                "categories": {
                    "performance": { "score": 0.92 },
                    "best-practices": { "score": 0.80 },
                    "seo": { "score": 0.67 }
                },
                "audits": {
                    "largest-contentful-paint": { "displayValue": "1.8 s" },
                    "total-blocking-time": { "displayValue": "65 ms", "numericValue": 65.5 },
                    "cumulative-layout-shift": { "displayValue": "0.03" }
                }
            }
        }));
        let metrics = derive_metrics(&result);

        assert_eq!(metrics.performance_pct, Some(92));
        assert_eq!(metrics.structure_pct, Some(80));
        assert_eq!(metrics.seo_pct, Some(67));
        assert_eq!(metrics.grade, Grade::A);
        assert_eq!(metrics.largest_contentful_paint, "1.8 s");
        assert_eq!(metrics.total_blocking_time, "65 ms");
        assert_eq!(metrics.tbt_ms, Some(65.5));
        assert_eq!(metrics.cumulative_layout_shift, "0.03");
        assert_eq!(metrics.screenshot, None);
    }

    #[test]
    fn test_derive_metrics_empty_response() {
        let metrics = derive_metrics(&AnalysisResult::from_json(json!({})));

        assert_eq!(metrics.performance_pct, None);
        assert_eq!(metrics.structure_pct, None);
        assert_eq!(metrics.grade, Grade::Unrated);
        assert_eq!(metrics.largest_contentful_paint, PLACEHOLDER);
        assert_eq!(metrics.total_blocking_time, PLACEHOLDER);
        assert_eq!(metrics.cumulative_layout_shift, PLACEHOLDER);
        assert_eq!(metrics.tbt_ms, None);
    }

    #[test]
    fn test_audit_display_empty_string_is_placeholder() {
        let result = AnalysisResult::from_json(json!({
            "lighthouseResult": { "audits": {
                "largest-contentful-paint": { "displayValue": "" }
            } }
        }));
        assert_eq!(audit_display(result.view(), LARGEST_CONTENTFUL_PAINT), PLACEHOLDER);
    }
}

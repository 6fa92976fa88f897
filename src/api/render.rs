use crate::models::analysis::{AnalysisResult, AnalysisStatus, DerivedMetrics, Strategy};
use crate::services::report_service::ReportSnapshot;
use crate::services::site_audit_service::compute::PLACEHOLDER;
use crate::utils::escape_html;

pub const PAGE_TITLE: &str = "Website Check";
pub const SUBMIT_PROMPT: &str = "Enter a URL and click <strong>Analyze</strong>. Optionally set a \
<em>PSI_API_KEY</em> environment variable to allow more requests.";
pub const NO_SCREENSHOT: &str = "No screenshot available.";
pub const LOADING_TEXT: &str = "Lighthouse is running…";

const STYLE: &str = "
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            margin: 0;
            background: #f5f7fa;
            color: #2d3748;
            padding: 20px;
        }
        .container {
            background: white;
            padding: 2rem;
            border-radius: 12px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            max-width: 760px;
            margin: 0 auto;
        }
        .caption { color: #718096; font-size: 0.9rem; }
        form { margin: 1.5rem 0; }
        input[type=text] { width: 100%; padding: 8px; font-size: 1rem; box-sizing: border-box; }
        .strategy { margin: 0.75rem 0; }
        button {
            background: #4299e1;
            color: white;
            border: none;
            padding: 10px 20px;
            border-radius: 6px;
            font-size: 1rem;
            cursor: pointer;
        }
        .row { display: flex; gap: 1rem; margin: 1rem 0; }
        .metric { flex: 1; background: #f8fafc; border-radius: 8px; padding: 1rem; }
        .metric .label { font-size: 0.85rem; color: #4a5568; }
        .metric .value { font-size: 1.75rem; font-weight: bold; }
        .info { background: #ebf8ff; color: #2b6cb0; padding: 0.75rem 1rem; border-radius: 6px; }
        .error { background: #fff5f5; color: #c53030; padding: 0.75rem 1rem; border-radius: 6px; }
        .loading { color: #4a5568; font-style: italic; }
        img { max-width: 100%; }
        pre { background: #f8fafc; padding: 1rem; overflow-x: auto; font-size: 0.8rem; }
";

/// Render the whole dashboard from one snapshot of the store.
///
/// `notice` is an extra line shown under the form, used when a submission
/// was rejected before any call was made.
pub fn render_dashboard(snapshot: &ReportSnapshot, notice: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str(&render_form(snapshot));

    if let Some(notice) = notice {
        body.push_str(&format!("<p class=\"info\">{}</p>", escape_html(notice)));
    }

    match snapshot.status {
        AnalysisStatus::Loading => {
            body.push_str(&format!("<p class=\"loading\">{}</p>", LOADING_TEXT));
        }
        AnalysisStatus::Error => {
            if let Some(error) = &snapshot.error {
                body.push_str(&format!(
                    "<p class=\"error\">Request failed: {}</p>",
                    escape_html(error)
                ));
            }
        }
        AnalysisStatus::Idle | AnalysisStatus::Success => {}
    }

    match (&snapshot.result, snapshot.metrics()) {
        (Some(result), Some(metrics)) => body.push_str(&render_report(result, &metrics)),
        _ => body.push_str(&format!("<p class=\"info\">{}</p>", SUBMIT_PROMPT)),
    }

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <div class=\"container\">
        <h1>{title}</h1>
        <p class=\"caption\">Rust + axum + PageSpeed Insights (Lighthouse)</p>
        {body}
    </div>
</body>
</html>",
        title = PAGE_TITLE,
        style = STYLE,
        body = body,
    )
}

fn render_form(snapshot: &ReportSnapshot) -> String {
    let (url, strategy) = snapshot
        .request
        .as_ref()
        .map(|r| (r.url.as_str(), r.strategy))
        .unwrap_or(("", Strategy::default()));

    let radio = |value: Strategy, label: &str| {
        let checked = if value == strategy { " checked" } else { "" };
        format!(
            "<label><input type=\"radio\" name=\"strategy\" value=\"{}\"{}> {}</label>",
            value, checked, label
        )
    };

    format!(
        "<form method=\"post\" action=\"/analyze\">
            <label for=\"url\">URL to check</label>
            <input type=\"text\" id=\"url\" name=\"url\" placeholder=\"https://example.com\" value=\"{}\">
            <div class=\"strategy\">Device: {} {}</div>
            <button type=\"submit\">Analyze</button>
        </form>",
        escape_html(url),
        radio(Strategy::Mobile, "mobile"),
        radio(Strategy::Desktop, "desktop"),
    )
}

fn metric(label: &str, value: &str) -> String {
    format!(
        "<div class=\"metric\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
        label,
        escape_html(value)
    )
}

fn pct_text(pct: Option<i64>) -> String {
    pct.map(|p| p.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn render_report(result: &AnalysisResult, metrics: &DerivedMetrics) -> String {
    let screenshot = match &metrics.screenshot {
        Some(data) => format!(
            "<figure><img src=\"{}\" alt=\"Final screenshot\"><figcaption class=\"caption\">Final screenshot (Lighthouse)</figcaption></figure>",
            escape_html(data)
        ),
        None => format!("<p class=\"info\">{}</p>", NO_SCREENSHOT),
    };

    let raw = serde_json::to_string_pretty(result.raw()).unwrap_or_default();

    format!(
        "<section id=\"report\">
            <div class=\"row\">{}{}{}</div>
            <h2>Web Vitals</h2>
            <div class=\"row\">{}{}{}</div>
            <hr>
            <h2>Screenshot</h2>
            {}
            <details>
                <summary>Raw data (JSON)</summary>
                <pre>{}</pre>
            </details>
        </section>",
        metric("Performance", &pct_text(metrics.performance_pct)),
        metric("Structure (placeholder)", &pct_text(metrics.structure_pct)),
        metric("Overall grade (placeholder)", &metrics.grade.to_string()),
        metric("Largest Contentful Paint", &metrics.largest_contentful_paint),
        metric("Total Blocking Time", &metrics.total_blocking_time),
        metric("Cumulative Layout Shift", &metrics.cumulative_layout_shift),
        screenshot,
        escape_html(&raw),
    )
}

use serde::{Deserialize, Serialize};
use std::fmt;

// Letter band derived from the performance percentage
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    #[serde(rename = "—")]
    Unrated,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade_str = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::Unrated => "—",
        };
        write!(f, "{}", grade_str)
    }
}

/// Values computed from the latest result. Never stored on their own; rebuilt
/// from the result every time they are read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub performance_pct: Option<i64>,
    pub structure_pct: Option<i64>,
    pub seo_pct: Option<i64>,
    pub grade: Grade,
    pub largest_contentful_paint: String,
    pub total_blocking_time: String,
    pub tbt_ms: Option<f64>,
    pub cumulative_layout_shift: String,
    pub screenshot: Option<String>,
}

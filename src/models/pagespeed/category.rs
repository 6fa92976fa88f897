use serde::{Deserialize, Serialize};

// pub struct for each category score, 0..1 as reported by Lighthouse
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Category {
    pub score: Option<f64>,
}

// pub struct for the categories requested from PageSpeed
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Categories {
    pub performance: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
    pub seo: Option<Category>,
}

impl Categories {
    pub fn performance_score(&self) -> Option<f64> {
        self.performance.as_ref().and_then(|c| c.score)
    }

    pub fn best_practices_score(&self) -> Option<f64> {
        self.best_practices.as_ref().and_then(|c| c.score)
    }

    pub fn seo_score(&self) -> Option<f64> {
        self.seo.as_ref().and_then(|c| c.score)
    }
}

use serde::{Deserialize, Serialize};

// Dashboard state: Idle -> Loading -> {Success, Error}, and back to Loading on resubmit
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

use serde::{Deserialize, Serialize};

use super::conditions::Temperature;

/// Donation record posted by the donation service.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub food_type: String,
    /// Missing means "now", evaluated when the request arrives.
    #[serde(default)]
    pub upload_time: Option<String>,
    #[serde(default = "default_storage")]
    pub storage: String,
    #[serde(default)]
    pub temperature: Option<Temperature>,
}
fn default_storage() -> String {
    "room".into()
}

/// Which path produced the final estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "ml")]
    Model,
    #[serde(rename = "rules")]
    Rules,
}

/// Result of a single prediction. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub food_type: String,
    pub food_key: String,
    pub source: Source,
    pub base_expiry: u32,
    pub adjusted_expiry: u32,
    pub storage: String,
    pub temperature: Option<Temperature>,
    pub safe_till_iso: String,
    pub safe_till_readable: String,
}

#[derive(Debug, Serialize)]
pub struct ModelStatus {
    pub model_loaded: bool,
}

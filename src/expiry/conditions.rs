use serde::{Deserialize, Serialize};

/// Where the food is being kept while it waits for pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageCondition {
    #[default]
    Room,
    Fridge,
    Hotbox,
}

impl StorageCondition {
    /// Case-insensitive, exact otherwise: padded labels are not recognized.
    /// Anything unrecognized is treated as room storage.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "fridge" => Self::Fridge,
            "hotbox" => Self::Hotbox,
            _ => Self::Room,
        }
    }

    /// Encoding used in the scoring model's feature vector.
    pub fn code(self) -> f64 {
        match self {
            Self::Room => 0.0,
            Self::Fridge => 1.0,
            Self::Hotbox => 2.0,
        }
    }
}

/// Ambient temperature exactly as the donor sent it.
///
/// Numbers and numeric strings are usable readings; any other value is kept
/// so it can be echoed back, but never drives an adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Temperature {
    Celsius(serde_json::Number),
    Raw(serde_json::Value),
}

impl Temperature {
    pub fn celsius(&self) -> Option<f64> {
        let value = match self {
            Self::Celsius(n) => n.as_f64()?,
            Self::Raw(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok()?,
            Self::Raw(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for Temperature {
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(n) => Self::Celsius(n),
            None => Self::Raw(serde_json::Value::Null),
        }
    }
}

impl From<i64> for Temperature {
    fn from(value: i64) -> Self {
        Self::Celsius(value.into())
    }
}

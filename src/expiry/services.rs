use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::debug;

use super::adjust::adjust_expiry;
use super::clock;
use super::conditions::{StorageCondition, Temperature};
use super::dto::{Prediction, Source};
use super::normalize::normalize_food;
use super::rules;
use crate::model::ModelScorer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("unparsable upload_time: {input:?}")]
    UnparsableUploadTime { input: String },
}

/// Composes normalization, the rule table, the optional model and the
/// adjustment rules into a single "safe until" prediction.
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    scorer: ModelScorer,
}

impl Predictor {
    pub fn new(scorer: ModelScorer) -> Self {
        Self { scorer }
    }

    pub fn model_loaded(&self) -> bool {
        self.scorer.is_enabled()
    }

    pub fn predict_safe_till(
        &self,
        food_type: &str,
        upload_time: &str,
        storage: &str,
        temperature: Option<Temperature>,
    ) -> Result<Prediction, PredictError> {
        let uploaded = clock::parse_upload_time(upload_time).ok_or_else(|| {
            PredictError::UnparsableUploadTime {
                input: upload_time.to_string(),
            }
        })?;
        Ok(self.predict_at(food_type, uploaded, storage, temperature))
    }

    /// Same as [`Self::predict_safe_till`] for an upload instant that is
    /// already known.
    pub fn predict_at(
        &self,
        food_type: &str,
        uploaded: OffsetDateTime,
        storage: &str,
        temperature: Option<Temperature>,
    ) -> Prediction {
        let food_key = normalize_food(food_type);
        let base_expiry = rules::baseline_hours(&food_key);

        let condition = StorageCondition::from_label(storage);
        let celsius = temperature.as_ref().and_then(Temperature::celsius);

        let (adjusted_expiry, source) = match self.scorer.score(base_expiry, condition, celsius) {
            Some(hours) => (hours, Source::Model),
            None => (adjust_expiry(base_expiry, condition, celsius), Source::Rules),
        };

        let safe_till = uploaded.saturating_add(Duration::hours(i64::from(adjusted_expiry)));
        debug!(
            %food_key,
            known = rules::is_known(&food_key),
            base_expiry,
            adjusted_expiry,
            ?source,
            "predicted shelf-life"
        );

        Prediction {
            food_type: food_type.to_string(),
            food_key,
            source,
            base_expiry,
            adjusted_expiry,
            storage: storage.to_string(),
            temperature,
            safe_till_iso: clock::format_iso(safe_till),
            safe_till_readable: clock::format_readable(safe_till),
        }
    }
}

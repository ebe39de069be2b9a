use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::artifact::{Features, Regressor, ScoreError, ShelfLifeModel};
use crate::expiry::conditions::StorageCondition;

/// Temperature fed to the model when the donor did not report one.
pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;

/// Largest estimate accepted from a model: thirty days.
pub const MAX_ESTIMATE_HOURS: f64 = 720.0;

/// Optional model-backed shelf-life estimate.
///
/// Built once at startup. A scorer without a model stays disabled for the
/// life of the process and every call falls back to the rule path.
#[derive(Clone, Default)]
pub struct ModelScorer {
    model: Option<Arc<dyn Regressor>>,
}

impl ModelScorer {
    pub fn disabled() -> Self {
        Self { model: None }
    }

    pub fn with_model(model: Arc<dyn Regressor>) -> Self {
        Self { model: Some(model) }
    }

    /// Loads the artifact at `path`. A missing or unreadable artifact
    /// disables the scorer instead of failing startup.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!(path = %path.display(), "no model artifact found; using rules only");
            return Self::disabled();
        }
        match ShelfLifeModel::load(path) {
            Ok(model) => {
                info!(path = %path.display(), "loaded model artifact");
                Self::with_model(Arc::new(model))
            }
            Err(e) => {
                warn!(
                    error = %e,
                    path = %path.display(),
                    "failed to load model artifact; using rules only"
                );
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.model.is_some()
    }

    /// Rounded, floor-1 estimate, or the reason there is none.
    pub fn try_score(
        &self,
        baseline_hours: u32,
        storage: StorageCondition,
        celsius: Option<f64>,
    ) -> Result<u32, ScoreError> {
        let model = self.model.as_ref().ok_or(ScoreError::Disabled)?;
        let features = featurize(baseline_hours, storage, celsius);
        let raw = model.predict(&features)?;
        if !raw.is_finite() {
            return Err(ScoreError::NonFinite);
        }
        if raw > MAX_ESTIMATE_HOURS {
            return Err(ScoreError::OutOfRange {
                hours: raw,
                max: MAX_ESTIMATE_HOURS,
            });
        }
        Ok((raw.round_ties_even() as u32).max(1))
    }

    /// Per-call failures are logged and reported as `None`.
    pub fn score(
        &self,
        baseline_hours: u32,
        storage: StorageCondition,
        celsius: Option<f64>,
    ) -> Option<u32> {
        match self.try_score(baseline_hours, storage, celsius) {
            Ok(hours) => Some(hours),
            Err(ScoreError::Disabled) => None,
            Err(e) => {
                warn!(
                    error = %e,
                    baseline_hours,
                    ?storage,
                    "model scoring failed; falling back to rules"
                );
                None
            }
        }
    }
}

impl std::fmt::Debug for ModelScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelScorer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

pub fn featurize(baseline_hours: u32, storage: StorageCondition, celsius: Option<f64>) -> Features {
    [
        f64::from(baseline_hours),
        storage.code(),
        celsius.unwrap_or(DEFAULT_TEMPERATURE_C),
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    struct Fixed(f64);

    impl Regressor for Fixed {
        fn predict(&self, _features: &Features) -> Result<f64, ScoreError> {
            Ok(self.0)
        }
    }

    struct Failing;

    impl Regressor for Failing {
        fn predict(&self, _features: &Features) -> Result<f64, ScoreError> {
            Err(ScoreError::NonFinite)
        }
    }

    struct Echo;

    impl Regressor for Echo {
        fn predict(&self, features: &Features) -> Result<f64, ScoreError> {
            Ok(features[0] * 100.0 + features[1] * 10.0 + features[2])
        }
    }

    #[test]
    fn disabled_scorer_is_unavailable() {
        let scorer = ModelScorer::disabled();
        assert!(!scorer.is_enabled());
        assert_eq!(scorer.score(6, StorageCondition::Room, None), None);
        assert_eq!(
            scorer.try_score(6, StorageCondition::Room, None),
            Err(ScoreError::Disabled)
        );
    }

    #[test]
    fn rounds_and_floors_estimates() {
        let scorer = ModelScorer::with_model(Arc::new(Fixed(7.5)));
        assert_eq!(scorer.score(6, StorageCondition::Room, None), Some(8));

        // Halves go to the even neighbour.
        let scorer = ModelScorer::with_model(Arc::new(Fixed(6.5)));
        assert_eq!(scorer.score(6, StorageCondition::Room, None), Some(6));

        let scorer = ModelScorer::with_model(Arc::new(Fixed(2.5)));
        assert_eq!(scorer.score(6, StorageCondition::Room, None), Some(2));

        let scorer = ModelScorer::with_model(Arc::new(Fixed(7.49)));
        assert_eq!(scorer.score(6, StorageCondition::Room, None), Some(7));

        let scorer = ModelScorer::with_model(Arc::new(Fixed(0.2)));
        assert_eq!(scorer.score(6, StorageCondition::Room, None), Some(1));

        let scorer = ModelScorer::with_model(Arc::new(Fixed(-4.0)));
        assert_eq!(scorer.score(6, StorageCondition::Room, None), Some(1));
    }

    #[test]
    fn non_finite_and_runaway_estimates_are_rejected() {
        for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let scorer = ModelScorer::with_model(Arc::new(Fixed(raw)));
            assert_eq!(
                scorer.try_score(6, StorageCondition::Room, None),
                Err(ScoreError::NonFinite),
                "{raw}"
            );
            assert_eq!(scorer.score(6, StorageCondition::Room, None), None, "{raw}");
        }

        let scorer = ModelScorer::with_model(Arc::new(Fixed(1e12)));
        assert_eq!(
            scorer.try_score(6, StorageCondition::Room, None),
            Err(ScoreError::OutOfRange {
                hours: 1e12,
                max: MAX_ESTIMATE_HOURS
            })
        );
        assert_eq!(scorer.score(6, StorageCondition::Room, None), None);

        let scorer = ModelScorer::with_model(Arc::new(Fixed(MAX_ESTIMATE_HOURS)));
        assert_eq!(scorer.score(6, StorageCondition::Room, None), Some(720));
        assert!(scorer.is_enabled());
    }

    #[test]
    fn call_time_failure_is_per_call() {
        let scorer = ModelScorer::with_model(Arc::new(Failing));
        assert!(scorer.is_enabled());
        assert_eq!(scorer.score(6, StorageCondition::Fridge, Some(18.0)), None);
        assert!(scorer.is_enabled());
    }

    #[test]
    fn feature_vector_layout() {
        assert_eq!(featurize(6, StorageCondition::Fridge, Some(18.0)), [6.0, 1.0, 18.0]);
        assert_eq!(featurize(3, StorageCondition::Hotbox, None), [3.0, 2.0, 25.0]);

        let scorer = ModelScorer::with_model(Arc::new(Echo));
        assert_eq!(scorer.score(2, StorageCondition::Room, None), Some(225));
    }

    #[test]
    fn load_missing_file_disables() {
        let dir = tempfile::tempdir().expect("tempdir");
        let scorer = ModelScorer::load(&dir.path().join("model.json"));
        assert!(!scorer.is_enabled());
    }

    #[test]
    fn load_corrupt_file_disables() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(b"{ not json").expect("write");
        let scorer = ModelScorer::load(file.path());
        assert!(!scorer.is_enabled());
    }

    #[test]
    fn load_valid_artifact_enables() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(
            br#"{ "kind": "linear", "intercept": 2.0, "coefficients": [2.0, 0.0, 0.0] }"#,
        )
        .expect("write");
        let scorer = ModelScorer::load(file.path());
        assert!(scorer.is_enabled());
        assert_eq!(scorer.score(6, StorageCondition::Room, None), Some(14));
    }
}

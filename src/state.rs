use crate::config::AppConfig;
use crate::expiry::Predictor;
use crate::model::ModelScorer;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub predictor: Arc<Predictor>,
}

impl AppState {
    /// Reads configuration and loads the scoring artifact once. A missing or
    /// broken artifact leaves the predictor on rules only.
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let scorer = ModelScorer::load(&config.model_path);
        Ok(Self::from_parts(config, scorer))
    }

    pub fn from_parts(config: Arc<AppConfig>, scorer: ModelScorer) -> Self {
        Self {
            config,
            predictor: Arc::new(Predictor::new(scorer)),
        }
    }

    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            model_path: PathBuf::from("model.json"),
        });
        Self::from_parts(config, ModelScorer::disabled())
    }
}

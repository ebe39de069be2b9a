use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::clock;
use super::dto::{ModelStatus, PredictRequest, Prediction};
use crate::state::AppState;

pub fn predict_routes() -> Router<AppState> {
    Router::new().route("/predict", post(predict))
}

pub fn status_routes() -> Router<AppState> {
    Router::new().route("/health/model", get(model_status))
}

#[instrument(skip(state, payload), fields(food_type = %payload.food_type))]
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<Prediction>, (StatusCode, String)> {
    let PredictRequest {
        food_type,
        upload_time,
        storage,
        temperature,
    } = payload;

    let prediction = match upload_time {
        Some(raw) => state
            .predictor
            .predict_safe_till(&food_type, &raw, &storage, temperature)
            .map_err(|e| {
                warn!(error = %e, "rejecting prediction request");
                (StatusCode::BAD_REQUEST, e.to_string())
            })?,
        None => state
            .predictor
            .predict_at(&food_type, clock::now(), &storage, temperature),
    };

    info!(
        food_key = %prediction.food_key,
        source = ?prediction.source,
        adjusted_expiry = prediction.adjusted_expiry,
        "prediction served"
    );
    Ok(Json(prediction))
}

#[instrument(skip(state))]
pub async fn model_status(State(state): State<AppState>) -> Json<ModelStatus> {
    Json(ModelStatus {
        model_loaded: state.predictor.model_loaded(),
    })
}

mod adjust;
pub mod clock;
pub mod conditions;
pub mod dto;
pub mod handlers;
pub mod normalize;
pub mod rules;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use adjust::adjust_expiry;
pub use conditions::{StorageCondition, Temperature};
pub use dto::{Prediction, Source};
pub use services::{PredictError, Predictor};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::predict_routes())
        .merge(handlers::status_routes())
}

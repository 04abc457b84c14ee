//! Prediction endpoint

use std::time::Instant;

use axum::extract::State;
use tracing::debug;

use super::state::AppState;
use super::types::{ApiError, Json, PredictRequest, PredictResponse};
use crate::infrastructure::observability::{record_prediction, PredictionOutcome};

/// POST /predict - Predict a disease from free-text symptoms
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let start = Instant::now();
    let result = state.prediction_service.predict(&request.symptoms);

    let outcome = if result.is_ok() {
        PredictionOutcome::Success
    } else {
        PredictionOutcome::Failure
    };
    record_prediction(outcome, start.elapsed());

    let prediction = result?;

    debug!(
        disease = %prediction.disease,
        confidence = ?prediction.confidence,
        "Prediction completed"
    );

    Ok(Json(PredictResponse::from(prediction)))
}

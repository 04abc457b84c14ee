//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::PredictionService;

/// State shared by every request handler.
///
/// Cloning is cheap; the loaded artifacts are never mutated after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub prediction_service: Arc<PredictionService>,
}

impl AppState {
    pub fn new(prediction_service: PredictionService) -> Self {
        Self {
            prediction_service: Arc::new(prediction_service),
        }
    }
}

//! Disease Predictor
//!
//! Serves a pre-trained symptom text classifier over HTTP:
//! - Artifacts (TF-IDF vectorizer + classifier) loaded once at startup
//! - `POST /predict` returning a disease label and confidence
//! - Health check, static index page and Prometheus metrics

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod testing;

pub use config::AppConfig;

use api::state::AppState;
use domain::DomainError;
use infrastructure::services::PredictionService;

/// Load the configured artifacts and build the shared application state
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let service = PredictionService::from_artifacts(&config.artifacts.paths())?;
    Ok(AppState::new(service))
}

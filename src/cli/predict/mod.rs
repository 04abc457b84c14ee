//! Predict command - one-off prediction from the command line

use clap::Args;

use super::ArtifactArgs;
use crate::api::types::PredictResponse;
use crate::config::{AppConfig, LogFormat};
use crate::infrastructure::logging;
use crate::infrastructure::services::PredictionService;

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Free-text description of the symptoms
    pub symptoms: String,
}

/// Load the artifacts, predict once and print the response body
pub fn run(args: PredictArgs) -> anyhow::Result<()> {
    let mut config = super::load_config()?;
    args.artifacts.apply(&mut config);
    init_logging(&config);

    let service = PredictionService::from_artifacts(&config.artifacts.paths())?;
    let response = respond(&service, &args.symptoms);

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Same response shape as `POST /predict`
fn respond(service: &PredictionService, symptoms: &str) -> PredictResponse {
    match service.predict(symptoms) {
        Ok(prediction) => PredictResponse::from(prediction),
        Err(e) => PredictResponse::failure(e.to_string()),
    }
}

/// Logs go to stderr so stdout stays machine readable
pub(super) fn init_logging(config: &AppConfig) {
    logging::init_logging_with_format(&config.logging, LogFormat::Compact);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_service;

    #[test]
    fn test_respond_success() {
        let response = respond(&sample_service(), "runny nose sneezing");

        assert!(response.success);
        assert_eq!(response.disease.as_deref(), Some("Common Cold"));
    }
}

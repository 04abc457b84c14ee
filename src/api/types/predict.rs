//! Request and response bodies of the prediction endpoint

use serde::{Deserialize, Serialize};

use crate::domain::Prediction;

/// Body of `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub symptoms: String,
}

/// Body returned by `POST /predict`, for failures as well
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            disease: None,
            confidence: None,
            error: Some(message.into()),
        }
    }
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            success: true,
            disease: Some(prediction.disease),
            confidence: prediction.confidence,
            error: None,
        }
    }
}

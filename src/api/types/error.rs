//! Error type of the prediction API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use super::predict::PredictResponse;
use crate::domain::DomainError;

/// Coarse classification, used for logging only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    InvalidRequest,
    PredictionFailed,
}

/// API error rendered as `{"success": false, "error": ...}`.
///
/// Errors are reported in the body with HTTP 200; existing clients only
/// inspect the `success` flag.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The request body could not be turned into a prediction request
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InvalidRequest, message)
    }

    /// Vectorizing or classifying failed
    pub fn prediction_failed(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::PredictionFailed, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.kind {
            ApiErrorKind::InvalidRequest => {
                tracing::warn!(error = %self.message, "Rejected prediction request")
            }
            ApiErrorKind::PredictionFailed => {
                tracing::error!(error = %self.message, "Prediction failed")
            }
        }

        (StatusCode::OK, Json(PredictResponse::failure(self.message))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        // malformed requests are rejected by the extractor, never by the domain
        Self::prediction_failed(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_conversion() {
        let err: ApiError = DomainError::classifier("bad weights").into();
        assert_eq!(err.kind, ApiErrorKind::PredictionFailed);
        assert_eq!(err.message, "Classifier error: bad weights");

        let err: ApiError = DomainError::vectorizer("vocabulary is empty").into();
        assert_eq!(err.kind, ApiErrorKind::PredictionFailed);

        let err: ApiError = DomainError::artifact("models/model.json", "missing").into();
        assert_eq!(err.kind, ApiErrorKind::PredictionFailed);
        assert_eq!(err.message, "Artifact error: models/model.json - missing");
    }

    #[tokio::test]
    async fn test_error_response_is_ok_with_failure_body() {
        let response = ApiError::prediction_failed("boom").into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: PredictResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body, PredictResponse::failure("boom"));
    }
}

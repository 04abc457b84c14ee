//! Custom JSON extractor that reports rejections in the prediction response format

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Wrapper around `axum::Json` whose rejection is rendered as an [`ApiError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JSON rejection carrying a user facing message
#[derive(Debug)]
pub struct JsonRejection {
    message: String,
}

impl JsonRejection {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        ApiError::invalid_request(self.message).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonRejection {
                message: format_rejection_message(&rejection),
            }),
        }
    }
}

/// Format the rejection message to be more user-friendly
fn format_rejection_message(rejection: &axum::extract::rejection::JsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid JSON request".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest, StatusCode};

    use super::*;
    use crate::api::types::{PredictRequest, PredictResponse};

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_valid_body() {
        let Json(request) = Json::<PredictRequest>::from_request(json_request(r#"{"symptoms":"rash"}"#), &())
            .await
            .unwrap();

        assert_eq!(request.symptoms, "rash");
    }

    #[tokio::test]
    async fn test_missing_field_names_the_field() {
        let rejection = Json::<PredictRequest>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();

        assert!(rejection.message().starts_with("Invalid JSON data"));
        assert!(rejection.message().contains("symptoms"));
    }

    #[tokio::test]
    async fn test_syntax_error_message() {
        let rejection = Json::<PredictRequest>::from_request(json_request("{"), &())
            .await
            .unwrap_err();

        assert!(rejection.message().starts_with("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_rejection_renders_failure_with_ok_status() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/predict")
            .body(Body::from(r#"{"symptoms":"rash"}"#))
            .unwrap();

        let rejection = Json::<PredictRequest>::from_request(request, &())
            .await
            .unwrap_err();
        let response = rejection.into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: PredictResponse = serde_json::from_slice(&bytes).unwrap();

        assert!(!body.success);
        assert!(body.error.unwrap().contains("Content-Type"));
    }

    #[test]
    fn test_json_into_inner() {
        let json = Json(42);
        assert_eq!(json.into_inner(), 42);
    }
}

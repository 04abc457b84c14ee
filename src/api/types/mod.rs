//! API request, response and error types

pub mod error;
pub mod json;
pub mod predict;

pub use error::{ApiError, ApiErrorKind};
pub use json::Json;
pub use predict::{PredictRequest, PredictResponse};

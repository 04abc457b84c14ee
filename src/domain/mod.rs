//! Domain layer - Core types and capabilities of the prediction service

pub mod error;
pub mod prediction;

pub use error::DomainError;
pub use prediction::{
    confidence_from_probabilities, Classifier, Prediction, SparseVector, TextVectorizer,
};

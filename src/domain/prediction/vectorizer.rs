use super::features::SparseVector;
use crate::domain::DomainError;

/// Transforms raw text into a fixed-dimensional feature vector
#[cfg_attr(test, mockall::automock)]
pub trait TextVectorizer: Send + Sync {
    /// Transform a single document
    fn transform(&self, text: &str) -> Result<SparseVector, DomainError>;

    /// Dimension of every vector returned by `transform`
    fn n_features(&self) -> usize;
}

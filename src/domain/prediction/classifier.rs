use super::features::SparseVector;
use crate::domain::DomainError;

/// A trained model mapping feature vectors to class labels
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    /// Number of input features the model was trained on
    fn n_features(&self) -> usize;

    /// Predict the label of a single row
    fn predict(&self, features: &SparseVector) -> Result<String, DomainError>;

    /// Per-class probability estimates, ordered like the model's classes.
    ///
    /// Returns `Ok(None)` when the model has no probability capability.
    fn predict_proba(&self, features: &SparseVector) -> Result<Option<Vec<f64>>, DomainError>;
}

//! Prediction service - symptom text in, disease label out

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    confidence_from_probabilities, Classifier, DomainError, Prediction, TextVectorizer,
};
use crate::infrastructure::artifact::{load_artifacts, ArtifactPaths};

/// Wraps a vectorizer and a classifier that were loaded once at startup.
///
/// Both are only read after construction, so the service is shared across
/// request handlers behind an `Arc`.
pub struct PredictionService {
    vectorizer: Arc<dyn TextVectorizer>,
    classifier: Arc<dyn Classifier>,
}

impl std::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("n_features", &self.vectorizer.n_features())
            .finish()
    }
}

impl PredictionService {
    /// Create a service, checking that both components share a feature space
    pub fn new(
        vectorizer: Arc<dyn TextVectorizer>,
        classifier: Arc<dyn Classifier>,
    ) -> Result<Self, DomainError> {
        if vectorizer.n_features() != classifier.n_features() {
            return Err(DomainError::classifier(format!(
                "classifier expects {} features but vectorizer produces {}",
                classifier.n_features(),
                vectorizer.n_features()
            )));
        }

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Load both artifacts from disk
    pub fn from_artifacts(paths: &ArtifactPaths) -> Result<Self, DomainError> {
        let loaded = load_artifacts(paths)?;
        Self::new(Arc::new(loaded.vectorizer), Arc::new(loaded.classifier))
    }

    /// Predict the disease described by free-text symptoms
    pub fn predict(&self, symptoms: &str) -> Result<Prediction, DomainError> {
        let text = symptoms.to_lowercase();
        let features = self.vectorizer.transform(&text)?;

        debug!(
            chars = text.len(),
            non_zero = features.nnz(),
            "Symptoms vectorized"
        );

        let disease = self.classifier.predict(&features)?;
        let confidence = self
            .classifier
            .predict_proba(&features)?
            .and_then(|probabilities| confidence_from_probabilities(&probabilities));

        Ok(Prediction::new(disease, confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::{MockClassifier, MockTextVectorizer};
    use crate::domain::SparseVector;

    fn vectorizer_with(n_features: usize) -> MockTextVectorizer {
        let mut vectorizer = MockTextVectorizer::new();
        vectorizer.expect_n_features().return_const(n_features);
        vectorizer
    }

    fn classifier_with(n_features: usize) -> MockClassifier {
        let mut classifier = MockClassifier::new();
        classifier.expect_n_features().return_const(n_features);
        classifier
    }

    #[test]
    fn test_predict_lowercases_and_reports_confidence() {
        let mut vectorizer = vectorizer_with(4);
        vectorizer
            .expect_transform()
            .withf(|text| text.to_string() == "fever cough headache")
            .times(1)
            .returning(|_| Ok(SparseVector::from_entries(4, vec![(0, 1.0)]).unwrap()));

        let mut classifier = classifier_with(4);
        classifier
            .expect_predict()
            .returning(|_| Ok("Influenza".to_string()));
        classifier
            .expect_predict_proba()
            .returning(|_| Ok(Some(vec![0.2, 0.8])));

        let service = PredictionService::new(Arc::new(vectorizer), Arc::new(classifier)).unwrap();
        let prediction = service.predict("Fever Cough HEADACHE").unwrap();

        assert_eq!(prediction.disease, "Influenza");
        assert!((prediction.confidence.unwrap() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_without_probability_capability() {
        let mut vectorizer = vectorizer_with(2);
        vectorizer
            .expect_transform()
            .returning(|_| Ok(SparseVector::zeros(2)));

        let mut classifier = classifier_with(2);
        classifier
            .expect_predict()
            .returning(|_| Ok("Migraine".to_string()));
        classifier.expect_predict_proba().returning(|_| Ok(None));

        let service = PredictionService::new(Arc::new(vectorizer), Arc::new(classifier)).unwrap();
        let prediction = service.predict("throbbing headache").unwrap();

        assert_eq!(prediction, Prediction::new("Migraine", None));
    }

    #[test]
    fn test_transform_error_propagates() {
        let mut vectorizer = vectorizer_with(2);
        vectorizer
            .expect_transform()
            .returning(|_| Err(DomainError::vectorizer("tokenizer failed")));

        let mut classifier = classifier_with(2);
        classifier.expect_predict().never();

        let service = PredictionService::new(Arc::new(vectorizer), Arc::new(classifier)).unwrap();
        let err = service.predict("anything").unwrap_err();

        assert!(err.to_string().contains("tokenizer failed"));
    }

    #[test]
    fn test_predict_error_propagates() {
        let mut vectorizer = vectorizer_with(2);
        vectorizer
            .expect_transform()
            .returning(|_| Ok(SparseVector::zeros(2)));

        let mut classifier = classifier_with(2);
        classifier
            .expect_predict()
            .returning(|_| Err(DomainError::classifier("bad weights")));

        let service = PredictionService::new(Arc::new(vectorizer), Arc::new(classifier)).unwrap();
        assert!(matches!(
            service.predict("rash"),
            Err(DomainError::Classifier { .. })
        ));
    }

    #[test]
    fn test_feature_space_mismatch_is_rejected() {
        let result = PredictionService::new(
            Arc::new(vectorizer_with(3)),
            Arc::new(classifier_with(5)),
        );

        match result {
            Err(DomainError::Classifier { message }) => {
                assert_eq!(
                    message,
                    "classifier expects 5 features but vectorizer produces 3"
                );
            }
            other => panic!("expected a classifier error, got {other:?}"),
        }
    }
}

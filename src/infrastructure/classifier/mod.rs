//! Classifiers loaded from exported artifacts

mod linear;
mod math;
mod naive_bayes;

use serde::Deserialize;

use crate::domain::{Classifier, DomainError, SparseVector};

pub use linear::{LinearClassifier, LinearClassifierArtifact, ProbabilityMode};
pub use naive_bayes::{MultinomialNaiveBayes, MultinomialNaiveBayesArtifact};

/// Any supported classifier artifact, tagged by `kind`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    Linear(LinearClassifier),
    MultinomialNb(MultinomialNaiveBayes),
}

impl ClassifierArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::MultinomialNb(_) => "multinomial_nb",
        }
    }

    pub fn classes(&self) -> &[String] {
        match self {
            Self::Linear(model) => model.classes(),
            Self::MultinomialNb(model) => model.classes(),
        }
    }

    pub fn supports_proba(&self) -> bool {
        match self {
            Self::Linear(model) => model.supports_proba(),
            Self::MultinomialNb(_) => true,
        }
    }

    fn inner(&self) -> &dyn Classifier {
        match self {
            Self::Linear(model) => model,
            Self::MultinomialNb(model) => model,
        }
    }
}

impl Classifier for ClassifierArtifact {
    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn predict(&self, features: &SparseVector) -> Result<String, DomainError> {
        self.inner().predict(features)
    }

    fn predict_proba(&self, features: &SparseVector) -> Result<Option<Vec<f64>>, DomainError> {
        self.inner().predict_proba(features)
    }
}

/// Labels must be present, non-empty and unique
fn validate_classes(classes: &[String]) -> Result<(), DomainError> {
    if classes.len() < 2 {
        return Err(DomainError::classifier(format!(
            "at least two classes are required, got {}",
            classes.len()
        )));
    }

    if classes.iter().any(|label| label.trim().is_empty()) {
        return Err(DomainError::classifier("class labels must not be empty"));
    }

    let mut sorted: Vec<&String> = classes.iter().collect();
    sorted.sort();
    sorted.dedup();

    if sorted.len() != classes.len() {
        return Err(DomainError::classifier("class labels must be unique"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_linear() {
        let artifact: ClassifierArtifact = serde_json::from_str(
            r#"{
                "kind": "linear",
                "classes": ["Flu", "Cold"],
                "coef": [[1.0]],
                "intercept": [0.0],
                "probability": "none"
            }"#,
        )
        .unwrap();

        assert_eq!(artifact.kind(), "linear");
        assert_eq!(artifact.classes(), ["Flu", "Cold"]);
        assert_eq!(artifact.n_features(), 1);
        assert!(!artifact.supports_proba());
    }

    #[test]
    fn test_deserialize_tagged_naive_bayes() {
        let artifact: ClassifierArtifact = serde_json::from_str(
            r#"{
                "kind": "multinomial_nb",
                "classes": ["Flu", "Cold"],
                "class_log_prior": [-0.69, -0.69],
                "feature_log_prob": [[-0.1, -2.3], [-2.3, -0.1]]
            }"#,
        )
        .unwrap();

        assert_eq!(artifact.kind(), "multinomial_nb");
        assert!(artifact.supports_proba());

        let x = SparseVector::from_entries(2, vec![(1, 1.0)]).unwrap();
        assert_eq!(artifact.predict(&x).unwrap(), "Cold");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result: Result<ClassifierArtifact, _> =
            serde_json::from_str(r#"{"kind": "random_forest", "classes": ["a", "b"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_classes() {
        let labels = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert!(validate_classes(&labels(&["Flu", "Cold"])).is_ok());
        assert!(validate_classes(&labels(&["Flu"])).is_err());
        assert!(validate_classes(&labels(&["Flu", " "])).is_err());
        assert!(validate_classes(&labels(&["Flu", "Flu"])).is_err());
    }
}

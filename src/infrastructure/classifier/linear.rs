//! Linear classifiers (logistic regression, linear SVM)

use serde::Deserialize;

use super::math::{argmax, normalize, sigmoid, softmax};
use super::validate_classes;
use crate::domain::{Classifier, DomainError, SparseVector};

/// How decision values are turned into class probabilities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityMode {
    /// Multinomial logistic regression
    #[default]
    Softmax,
    /// One-vs-rest logistic regression
    OneVsRest,
    /// Margin-only models such as a linear SVM
    #[serde(rename = "none")]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifierArtifact {
    pub classes: Vec<String>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
    #[serde(default)]
    pub probability: ProbabilityMode,
}

/// Linear model with one weight row per class, or a single row for binary problems
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "LinearClassifierArtifact")]
pub struct LinearClassifier {
    classes: Vec<String>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    probability: ProbabilityMode,
    n_features: usize,
}

impl TryFrom<LinearClassifierArtifact> for LinearClassifier {
    type Error = DomainError;

    fn try_from(artifact: LinearClassifierArtifact) -> Result<Self, Self::Error> {
        validate_classes(&artifact.classes)?;

        let n_classes = artifact.classes.len();
        let n_rows = artifact.coef.len();
        let binary = n_classes == 2 && n_rows == 1;

        if !binary && n_rows != n_classes {
            return Err(DomainError::classifier(format!(
                "coef has {} rows for {} classes",
                n_rows, n_classes
            )));
        }

        if artifact.intercept.len() != n_rows {
            return Err(DomainError::classifier(format!(
                "intercept has {} entries for {} coef rows",
                artifact.intercept.len(),
                n_rows
            )));
        }

        let n_features = artifact.coef[0].len();

        if n_features == 0 || artifact.coef.iter().any(|row| row.len() != n_features) {
            return Err(DomainError::classifier(
                "coef rows must be non-empty and of equal length",
            ));
        }

        Ok(Self {
            classes: artifact.classes,
            coef: artifact.coef,
            intercept: artifact.intercept,
            probability: artifact.probability,
            n_features,
        })
    }
}

impl LinearClassifier {
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn supports_proba(&self) -> bool {
        self.probability != ProbabilityMode::Unsupported
    }

    fn is_binary(&self) -> bool {
        self.coef.len() == 1
    }

    /// Signed distance to each hyperplane
    pub fn decision_function(&self, features: &SparseVector) -> Result<Vec<f64>, DomainError> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| features.dot(row).map(|score| score + bias))
            .collect()
    }
}

impl Classifier for LinearClassifier {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &SparseVector) -> Result<String, DomainError> {
        let scores = self.decision_function(features)?;

        let index = if self.is_binary() {
            usize::from(scores[0] > 0.0)
        } else {
            argmax(&scores)
                .ok_or_else(|| DomainError::classifier("decision function produced no scores"))?
        };

        Ok(self.classes[index].clone())
    }

    fn predict_proba(&self, features: &SparseVector) -> Result<Option<Vec<f64>>, DomainError> {
        if !self.supports_proba() {
            return Ok(None);
        }

        let scores = self.decision_function(features)?;

        let probabilities = if self.is_binary() {
            let positive = sigmoid(scores[0]);
            vec![1.0 - positive, positive]
        } else {
            match self.probability {
                ProbabilityMode::Softmax => softmax(&scores),
                ProbabilityMode::OneVsRest => {
                    normalize(scores.into_iter().map(sigmoid).collect())
                }
                ProbabilityMode::Unsupported => return Ok(None),
            }
        };

        Ok(Some(probabilities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiclass(probability: &str) -> LinearClassifier {
        serde_json::from_str(&format!(
            r#"{{
                "classes": ["Common Cold", "Influenza", "Migraine"],
                "coef": [[1.0, 0.0], [0.5, 1.0], [-1.0, -1.0]],
                "intercept": [0.0, 0.0, 0.1],
                "probability": "{}"
            }}"#,
            probability
        ))
        .unwrap()
    }

    fn features(values: Vec<(usize, f64)>) -> SparseVector {
        SparseVector::from_entries(2, values).unwrap()
    }

    #[test]
    fn test_predict_multiclass_argmax() {
        let model = multiclass("softmax");
        assert_eq!(model.predict(&features(vec![(1, 1.0)])).unwrap(), "Influenza");
        assert_eq!(model.predict(&features(vec![(0, 1.0)])).unwrap(), "Common Cold");
        assert_eq!(model.predict(&SparseVector::zeros(2)).unwrap(), "Migraine");
    }

    #[test]
    fn test_softmax_probabilities() {
        let model = multiclass("softmax");
        let p = model.predict_proba(&features(vec![(1, 1.0)])).unwrap().unwrap();

        assert_eq!(p.len(), 3);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(argmax(&p), Some(1));
    }

    #[test]
    fn test_one_vs_rest_probabilities_sum_to_one() {
        let model = multiclass("one_vs_rest");
        let p = model.predict_proba(&features(vec![(0, 2.0)])).unwrap().unwrap();
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_margin_model_has_no_probabilities() {
        let model = multiclass("none");
        assert!(!model.supports_proba());
        assert_eq!(model.predict_proba(&features(vec![(0, 1.0)])).unwrap(), None);
    }

    #[test]
    fn test_binary_model() {
        let model: LinearClassifier = serde_json::from_str(
            r#"{"classes": ["Healthy", "Flu"], "coef": [[2.0, -1.0]], "intercept": [-0.5]}"#,
        )
        .unwrap();

        let sick = features(vec![(0, 1.0)]);
        assert_eq!(model.predict(&sick).unwrap(), "Flu");
        assert_eq!(model.predict(&SparseVector::zeros(2)).unwrap(), "Healthy");

        let p = model.predict_proba(&sick).unwrap().unwrap();
        assert!((p[1] - sigmoid(1.5)).abs() < 1e-12);
        assert!((p[0] + p[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_row_count_mismatch() {
        let result: Result<LinearClassifier, _> = serde_json::from_str(
            r#"{"classes": ["a", "b", "c"], "coef": [[1.0], [1.0]], "intercept": [0.0, 0.0]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_ragged_coef() {
        let result: Result<LinearClassifier, _> = serde_json::from_str(
            r#"{"classes": ["a", "b"], "coef": [[1.0, 2.0], [1.0]], "intercept": [0.0, 0.0]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let model = multiclass("softmax");
        let wrong = SparseVector::zeros(5);
        assert!(model.predict(&wrong).is_err());
    }
}

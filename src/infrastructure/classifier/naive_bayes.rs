//! Multinomial naive Bayes classifier

use serde::Deserialize;

use super::math::{argmax, softmax};
use super::validate_classes;
use crate::domain::{Classifier, DomainError, SparseVector};

#[derive(Debug, Clone, Deserialize)]
pub struct MultinomialNaiveBayesArtifact {
    pub classes: Vec<String>,
    pub class_log_prior: Vec<f64>,
    pub feature_log_prob: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "MultinomialNaiveBayesArtifact")]
pub struct MultinomialNaiveBayes {
    classes: Vec<String>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
    n_features: usize,
}

impl TryFrom<MultinomialNaiveBayesArtifact> for MultinomialNaiveBayes {
    type Error = DomainError;

    fn try_from(artifact: MultinomialNaiveBayesArtifact) -> Result<Self, Self::Error> {
        validate_classes(&artifact.classes)?;

        let n_classes = artifact.classes.len();

        if artifact.class_log_prior.len() != n_classes
            || artifact.feature_log_prob.len() != n_classes
        {
            return Err(DomainError::classifier(format!(
                "expected {} class priors and feature rows, got {} and {}",
                n_classes,
                artifact.class_log_prior.len(),
                artifact.feature_log_prob.len()
            )));
        }

        let n_features = artifact.feature_log_prob[0].len();

        if n_features == 0
            || artifact
                .feature_log_prob
                .iter()
                .any(|row| row.len() != n_features)
        {
            return Err(DomainError::classifier(
                "feature_log_prob rows must be non-empty and of equal length",
            ));
        }

        Ok(Self {
            classes: artifact.classes,
            class_log_prior: artifact.class_log_prior,
            feature_log_prob: artifact.feature_log_prob,
            n_features,
        })
    }
}

impl MultinomialNaiveBayes {
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Unnormalised log posterior of each class
    pub fn joint_log_likelihood(&self, features: &SparseVector) -> Result<Vec<f64>, DomainError> {
        self.feature_log_prob
            .iter()
            .zip(&self.class_log_prior)
            .map(|(row, prior)| features.dot(row).map(|score| score + prior))
            .collect()
    }
}

impl Classifier for MultinomialNaiveBayes {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &SparseVector) -> Result<String, DomainError> {
        let jll = self.joint_log_likelihood(features)?;
        let index = argmax(&jll)
            .ok_or_else(|| DomainError::classifier("joint log likelihood is undefined"))?;

        Ok(self.classes[index].clone())
    }

    fn predict_proba(&self, features: &SparseVector) -> Result<Option<Vec<f64>>, DomainError> {
        let jll = self.joint_log_likelihood(features)?;
        Ok(Some(softmax(&jll)))
    }
}

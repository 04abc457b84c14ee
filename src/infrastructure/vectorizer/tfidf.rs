//! TF-IDF vectorizer compatible with the fitted state of scikit-learn's `TfidfVectorizer`

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use regex::Regex;
use serde::Deserialize;

use crate::domain::{DomainError, SparseVector, TextVectorizer};

/// Token pattern used when the artifact does not provide one
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Row normalisation applied after weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Serialized form of a fitted TF-IDF vectorizer
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    #[serde(default)]
    pub idf: Vec<f64>,
    #[serde(default = "default_true")]
    pub use_idf: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub stop_words: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// Validated TF-IDF vectorizer ready to transform documents
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "TfidfVectorizerArtifact")]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    sublinear_tf: bool,
    norm: Option<Norm>,
    lowercase: bool,
    token_pattern: Regex,
    ngram_range: (usize, usize),
    stop_words: HashSet<String>,
}

impl TryFrom<TfidfVectorizerArtifact> for TfidfVectorizer {
    type Error = DomainError;

    fn try_from(artifact: TfidfVectorizerArtifact) -> Result<Self, Self::Error> {
        let n_features = artifact.vocabulary.len();

        if n_features == 0 {
            return Err(DomainError::vectorizer("vocabulary is empty"));
        }

        let mut seen = vec![false; n_features];

        for (term, &column) in &artifact.vocabulary {
            if column >= n_features || seen[column] {
                return Err(DomainError::vectorizer(format!(
                    "vocabulary term '{}' has invalid column {}",
                    term, column
                )));
            }
            seen[column] = true;
        }

        let idf = if artifact.use_idf {
            if artifact.idf.len() != n_features {
                return Err(DomainError::vectorizer(format!(
                    "idf has {} entries but vocabulary has {} terms",
                    artifact.idf.len(),
                    n_features
                )));
            }

            if artifact.idf.iter().any(|w| !w.is_finite()) {
                return Err(DomainError::vectorizer("idf contains non-finite weights"));
            }

            Some(artifact.idf)
        } else {
            None
        };

        let (min_n, max_n) = artifact.ngram_range;

        if min_n == 0 || min_n > max_n {
            return Err(DomainError::vectorizer(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        let token_pattern = Regex::new(&artifact.token_pattern).map_err(|e| {
            DomainError::vectorizer(format!("invalid token_pattern: {}", e))
        })?;

        if token_pattern.captures_len() > 2 {
            return Err(DomainError::vectorizer(
                "token_pattern must have at most one capturing group",
            ));
        }

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
            lowercase: artifact.lowercase,
            token_pattern,
            ngram_range: artifact.ngram_range,
            stop_words: artifact.stop_words.into_iter().collect(),
        })
    }
}

impl TfidfVectorizer {
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn uses_idf(&self) -> bool {
        self.idf.is_some()
    }

    pub fn ngram_range(&self) -> (usize, usize) {
        self.ngram_range
    }

    /// Split a document into the terms looked up in the vocabulary
    fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };

        let tokens: Vec<&str> = if self.token_pattern.captures_len() == 2 {
            self.token_pattern
                .captures_iter(&text)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
                .collect()
        } else {
            self.token_pattern
                .find_iter(&text)
                .map(|m| m.as_str())
                .collect()
        };

        let tokens: Vec<&str> = tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(*token))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();

        for n in min_n..=max_n.min(tokens.len()) {
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }

        terms
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn transform(&self, text: &str) -> Result<SparseVector, DomainError> {
        let counts: Vec<(usize, f64)> = self
            .analyze(text)
            .iter()
            .filter_map(|term| self.vocabulary.get(term).map(|&column| (column, 1.0)))
            .collect();

        let mut vector = SparseVector::from_entries(self.vocabulary.len(), counts)?;

        if self.sublinear_tf {
            vector.map_values(|_, tf| 1.0 + tf.ln());
        }

        if let Some(idf) = &self.idf {
            vector.map_values(|column, tf| tf * idf[column]);
        }

        let norm = match self.norm {
            Some(Norm::L1) => vector.l1_norm(),
            Some(Norm::L2) => vector.l2_norm(),
            None => 0.0,
        };

        if norm > 0.0 {
            vector.scale(1.0 / norm);
        }

        Ok(vector)
    }

    fn n_features(&self) -> usize {
        self.vocabulary.len()
    }
}

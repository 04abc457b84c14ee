use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::{Classifier, DomainError, TextVectorizer};
use crate::infrastructure::classifier::ClassifierArtifact;
use crate::infrastructure::vectorizer::TfidfVectorizer;

/// Locations of the two artifacts a prediction service needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub vectorizer: PathBuf,
}

impl ArtifactPaths {
    pub fn new(model: impl Into<PathBuf>, vectorizer: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            vectorizer: vectorizer.into(),
        }
    }
}

/// Artifacts that passed deserialization and cross-validation
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    pub vectorizer: TfidfVectorizer,
    pub classifier: ClassifierArtifact,
}

/// Read and deserialize a single JSON artifact
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let display = path.display().to_string();

    let contents = fs::read_to_string(path)
        .map_err(|e| DomainError::artifact(&display, format!("failed to read: {}", e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| DomainError::artifact(&display, format!("failed to parse: {}", e)))
}

/// Load the vectorizer and classifier and check they agree on the feature space
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<LoadedArtifacts, DomainError> {
    info!(path = %paths.vectorizer.display(), "Loading vectorizer");
    let vectorizer: TfidfVectorizer = load_json(&paths.vectorizer)?;

    info!(path = %paths.model.display(), "Loading model");
    let classifier: ClassifierArtifact = load_json(&paths.model)?;

    if vectorizer.n_features() != classifier.n_features() {
        return Err(DomainError::artifact(
            paths.model.display().to_string(),
            format!(
                "model expects {} features but vectorizer produces {}",
                classifier.n_features(),
                vectorizer.n_features()
            ),
        ));
    }

    info!(
        kind = classifier.kind(),
        classes = classifier.classes().len(),
        features = vectorizer.n_features(),
        probabilities = classifier.supports_proba(),
        "Model loaded successfully"
    );

    Ok(LoadedArtifacts {
        vectorizer,
        classifier,
    })
}

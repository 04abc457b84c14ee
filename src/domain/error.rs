use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Artifact error: {path} - {message}")]
    Artifact { path: String, message: String },

    #[error("Vectorizer error: {message}")]
    Vectorizer { message: String },

    #[error("Classifier error: {message}")]
    Classifier { message: String },
}

impl DomainError {
    pub fn artifact(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Artifact {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn vectorizer(message: impl Into<String>) -> Self {
        Self::Vectorizer {
            message: message.into(),
        }
    }

    pub fn classifier(message: impl Into<String>) -> Self {
        Self::Classifier {
            message: message.into(),
        }
    }
}

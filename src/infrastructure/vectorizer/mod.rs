//! Text vectorizers loaded from exported artifacts

mod tfidf;

pub use tfidf::{Norm, TfidfVectorizer, TfidfVectorizerArtifact, DEFAULT_TOKEN_PATTERN};

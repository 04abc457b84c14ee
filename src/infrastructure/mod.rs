//! Infrastructure layer - Artifact loading, model implementations and observability

pub mod artifact;
pub mod classifier;
pub mod logging;
pub mod observability;
pub mod services;
pub mod vectorizer;

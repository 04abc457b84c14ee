//! Inspect command - summary of the artifacts the server would load

use serde::Serialize;

use super::ArtifactArgs;
use crate::infrastructure::artifact::{load_artifacts, LoadedArtifacts};

#[derive(Debug, Serialize)]
struct ArtifactSummary {
    classifier: &'static str,
    classes: Vec<String>,
    supports_probabilities: bool,
    vocabulary_size: usize,
    uses_idf: bool,
    ngram_range: (usize, usize),
}

impl From<&LoadedArtifacts> for ArtifactSummary {
    fn from(loaded: &LoadedArtifacts) -> Self {
        Self {
            classifier: loaded.classifier.kind(),
            classes: loaded.classifier.classes().to_vec(),
            supports_probabilities: loaded.classifier.supports_proba(),
            vocabulary_size: loaded.vectorizer.vocabulary_size(),
            uses_idf: loaded.vectorizer.uses_idf(),
            ngram_range: loaded.vectorizer.ngram_range(),
        }
    }
}

pub fn run(args: ArtifactArgs) -> anyhow::Result<()> {
    let mut config = super::load_config()?;
    args.apply(&mut config);
    super::predict::init_logging(&config);

    let loaded = load_artifacts(&config.artifacts.paths())?;
    let summary = ArtifactSummary::from(&loaded);

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
